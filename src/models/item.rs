use serde::{Deserialize, Serialize};

/// Form body posted by the item submission forms
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ItemForm {
    #[serde(default)]
    pub item_text: String,
}

impl ItemForm {
    /// The submitted text exactly as sent, unless it is blank
    pub fn text(&self) -> Option<&str> {
        if self.item_text.trim().is_empty() {
            None
        } else {
            Some(&self.item_text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_kept_verbatim() {
        let form = ItemForm { item_text: "  Buy milk \n".to_string() };
        assert_eq!(form.text(), Some("  Buy milk \n"));
    }

    #[test]
    fn test_blank_text_is_none() {
        assert_eq!(ItemForm::default().text(), None);
        let form = ItemForm { item_text: " \t ".to_string() };
        assert_eq!(form.text(), None);
    }
}
