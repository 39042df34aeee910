//! Server-rendered HTML pages.
//!
//! Every piece of user supplied text goes through [`escape_html`] before it
//! is written into a page.

pub mod util;

use crate::db::ItemRow;
use util::escape_html;
use uuid::Uuid;

pub const EMPTY_ITEM_ERROR: &str = "You can't have an empty list item";

fn layout(title: &str, header: &str, form_action: &str, error: Option<&str>, body: &str) -> String {
    let error_html = error
        .map(|e| format!(r#"<div class="error">{}</div>"#, escape_html(e)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
</head>
<body>
    <h1>{header}</h1>
    <form method="POST" action="{action}">
        <input name="item_text" id="id_new_item" placeholder="Enter a to-do item" autofocus>
        {error_html}
    </form>
{body}
</body>
</html>
"#,
        title = escape_html(title),
        header = escape_html(header),
        action = escape_html(form_action),
        error_html = error_html,
        body = body,
    )
}

/// Address of a list's page
pub fn list_url(list_id: &Uuid) -> String {
    format!("/lists/{}/", list_id)
}

/// Address the add-item form posts to
pub fn add_item_url(list_id: &Uuid) -> String {
    format!("/lists/{}/add_item", list_id)
}

/// Home page with an empty submission form
pub fn home_page(error: Option<&str>) -> String {
    layout("To-Do", "Start a new To-Do list", "/lists/new", error, "")
}

/// Page listing the items of one list, numbered in creation order
pub fn list_page(list_id: &Uuid, items: &[ItemRow], error: Option<&str>) -> String {
    let rows: String = items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("        <tr><td>{}: {}</td></tr>\n", i + 1, escape_html(&item.text)))
        .collect();
    let table = format!("    <table id=\"id_list_table\">\n{}    </table>", rows);

    layout("To-Do", "Your To-Do list", &add_item_url(list_id), error, &table)
}

/// Bare page used for error responses
pub fn message_page(title: &str, message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n    <h1>{title}</h1>\n    <p>{message}</p>\n    <p><a href=\"/\">Start a new list</a></p>\n</body>\n</html>\n",
        title = escape_html(title),
        message = escape_html(message),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn item(id: i64, list_id: Uuid, text: &str) -> ItemRow {
        ItemRow {
            id,
            list_id,
            text: text.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_home_page_has_empty_form() {
        let html = home_page(None);
        assert!(html.contains("<title>To-Do</title>"));
        assert!(html.contains(r#"action="/lists/new""#));
        assert!(html.contains(r#"name="item_text""#));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_list_page_numbers_items_in_order() {
        let list_id = Uuid::new_v4();
        let items = vec![item(1, list_id, "Buy peacock feathers"), item(2, list_id, "Make a fly")];

        let html = list_page(&list_id, &items, None);

        let first = html.find("1: Buy peacock feathers").unwrap();
        let second = html.find("2: Make a fly").unwrap();
        assert!(first < second);
        assert!(html.contains(&format!(r#"action="/lists/{}/add_item""#, list_id)));
    }

    #[test]
    fn test_item_text_is_escaped() {
        let list_id = Uuid::new_v4();
        let html = list_page(&list_id, &[item(1, list_id, "<script>alert(1)</script>")], None);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_error_is_rendered() {
        let html = home_page(Some(EMPTY_ITEM_ERROR));
        assert!(html.contains(r#"<div class="error">You can&#x27;t have an empty list item</div>"#));
    }
}
