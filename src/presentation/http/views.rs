// src/presentation/http/views.rs
//! Server-rendered admin markup: the stop-word settings section and the post
//! list screen with its quick-edit rows.

use std::fmt::Write as _;

use crate::application::{dto::ArticleDto, stop_words::NONCE_FIELD};
use crate::domain::stop_words::STOP_WORDS_OPTION;

pub const SETTINGS_SECTION_TITLE: &str = "Permalink Stop Words";

const SETTINGS_SECTION_DESCRIPTION: &str = "Slugs are built automatically from the article title. \
List common words here to leave them out of generated permalinks and keep URLs short.";

const FIELD_LABEL: &str = "Words to remove from permalinks";

const FIELD_HINT: &str = "Comma-separate words, e.g (a,about,above,after,again,against)";

/// Screen id of the post list, the only screen the quick-edit script is loaded on.
pub const POST_LIST_SCREEN: &str = "edit-post";

pub const QUICK_EDIT_SCRIPT_URL: &str = "/assets/js/quick-edit.js";

pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

pub fn settings_section(words: &str) -> String {
    let option = escape_html(STOP_WORDS_OPTION);
    format!(
        concat!(
            "<h2>{title}</h2>\n",
            "<p>{description}</p>\n",
            "<table class=\"form-table\"><tr>\n",
            "<th scope=\"row\"><label for=\"{option}\">{label}</label></th>\n",
            "<td><textarea id=\"{option}\" name=\"{option}\" rows=\"8\" cols=\"50\">{words}</textarea><br />\n",
            "<small class=\"admin-note\">{hint}</small></td>\n",
            "</tr></table>\n"
        ),
        title = SETTINGS_SECTION_TITLE,
        description = SETTINGS_SECTION_DESCRIPTION,
        option = option,
        label = FIELD_LABEL,
        words = escape_html(words),
        hint = FIELD_HINT,
    )
}

pub fn settings_page(page: &str, words: &str) -> String {
    let page = escape_html(page);
    format!(
        concat!(
            "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>Settings: {page}</title></head><body>\n",
            "<form method=\"post\" action=\"/admin/options/{page}\">\n",
            "{section}",
            "<p class=\"submit\"><button type=\"submit\">Save Changes</button></p>\n",
            "</form>\n</body></html>\n"
        ),
        page = page,
        section = settings_section(words),
    )
}

/// Hidden per-row status marker, emitted in the `status` column only.
pub fn status_column(column: &str, article: &ArticleDto) -> Option<String> {
    (column == "status").then(|| {
        format!(
            "<div class=\"hidden hidden_post_status\">{}</div>",
            escape_html(&article.status)
        )
    })
}

/// Token field for the quick-edit box, emitted in the `status` column only.
pub fn quick_edit_nonce_field(column: &str, nonce: &str) -> Option<String> {
    (column == "status").then(|| {
        format!(
            "<input type=\"hidden\" id=\"{field}\" name=\"{field}\" value=\"{nonce}\" />",
            field = NONCE_FIELD,
            nonce = escape_html(nonce),
        )
    })
}

pub fn enqueued_scripts(screen_id: &str) -> &'static [&'static str] {
    if screen_id == POST_LIST_SCREEN {
        &[QUICK_EDIT_SCRIPT_URL]
    } else {
        &[]
    }
}

const STATUSES: [&str; 5] = ["draft", "pending", "private", "future", "publish"];

fn quick_edit_form(article: &ArticleDto, nonce: &str) -> String {
    let mut options = String::new();
    for status in STATUSES {
        let selected = if status == article.status { " selected" } else { "" };
        let _ = write!(options, "<option value=\"{status}\"{selected}>{status}</option>");
    }

    let nonce_field = quick_edit_nonce_field("status", nonce).unwrap_or_default();
    format!(
        concat!(
            "<form id=\"edit-{id}\" class=\"inline-edit-row\" method=\"post\" action=\"/admin/inline-save\" hidden>\n",
            "<label><span class=\"title\">Title</span> <input type=\"text\" name=\"post_title\" value=\"{title}\" /></label>\n",
            "<label><span class=\"title\">Slug</span> <input type=\"text\" name=\"post_name\" value=\"{slug}\" /></label>\n",
            "<label><span class=\"title\">Status</span> <select name=\"_status\">{options}</select></label>\n",
            "<input type=\"hidden\" name=\"action\" value=\"inline-save\" />\n",
            "<input type=\"hidden\" name=\"post_id\" value=\"{id}\" />\n",
            "{nonce_field}\n",
            "<button type=\"submit\">Update</button>\n",
            "</form>\n"
        ),
        id = article.id,
        title = escape_html(&article.title),
        slug = escape_html(&article.slug),
        options = options,
        nonce_field = nonce_field,
    )
}

fn post_row(article: &ArticleDto) -> String {
    let status = status_column("status", article).unwrap_or_default();
    format!(
        concat!(
            "<tr id=\"post-{id}\">",
            "<td class=\"title\">{title} <button type=\"button\" class=\"editinline\" data-id=\"{id}\">Quick Edit</button></td>",
            "<td class=\"slug\">{slug}</td>",
            "<td class=\"status\">{label}{status}</td>",
            "</tr>\n"
        ),
        id = article.id,
        title = escape_html(&article.title),
        slug = escape_html(&article.slug),
        label = escape_html(&article.status),
        status = status,
    )
}

/// Opens a row's quick-edit form and announces it with a `quick-edit:open`
/// event carrying the row id, which add-on scripts listen for.
const QUICK_EDIT_HOST_SCRIPT: &str = r"<script>
document.addEventListener('click', function (event) {
  var button = event.target.closest('.editinline');
  if (!button) { return; }
  var id = button.getAttribute('data-id');
  var form = document.getElementById('edit-' + id);
  if (!form) { return; }
  form.hidden = false;
  document.dispatchEvent(new CustomEvent('quick-edit:open', { detail: { id: id } }));
});
</script>
";

pub fn post_list_screen(articles: &[ArticleDto], nonce: &str) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>Posts</title></head><body>\n\
         <table class=\"wp-list-table posts\">\n\
         <thead><tr><th>Title</th><th>Slug</th><th>Status</th></tr></thead>\n<tbody>\n",
    );
    for article in articles {
        html.push_str(&post_row(article));
    }
    html.push_str("</tbody>\n</table>\n");
    for article in articles {
        html.push_str(&quick_edit_form(article, nonce));
    }
    html.push_str(QUICK_EDIT_HOST_SCRIPT);
    for src in enqueued_scripts(POST_LIST_SCREEN) {
        let _ = writeln!(html, "<script src=\"{src}\"></script>");
    }
    html.push_str("</body></html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn article(status: &str) -> ArticleDto {
        let now = Utc::now();
        ArticleDto {
            id: 3,
            title: "Tom & Jerry".into(),
            slug: "tom-jerry".into(),
            body: String::new(),
            status: status.into(),
            published_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn settings_section_binds_textarea_to_option() {
        let html = settings_section("a,<the>");
        assert!(html.contains("<textarea id=\"permalink_unwanted_slug_words\" name=\"permalink_unwanted_slug_words\""));
        assert!(html.contains(">a,&lt;the&gt;</textarea>"));
        assert!(html.contains(FIELD_HINT));
    }

    #[test]
    fn status_marker_only_in_status_column() {
        let draft = article("draft");
        assert_eq!(
            status_column("status", &draft).as_deref(),
            Some("<div class=\"hidden hidden_post_status\">draft</div>")
        );
        assert!(status_column("title", &draft).is_none());
    }

    #[test]
    fn nonce_field_uses_fixed_name() {
        let field = quick_edit_nonce_field("status", "abc").unwrap();
        assert!(field.contains("name=\"permalink-stop-words-nonce\""));
        assert!(field.contains("value=\"abc\""));
        assert!(quick_edit_nonce_field("date", "abc").is_none());
    }

    #[test]
    fn script_only_enqueued_on_post_list() {
        assert_eq!(enqueued_scripts("edit-post"), &[QUICK_EDIT_SCRIPT_URL]);
        assert!(enqueued_scripts("edit-page").is_empty());
    }

    #[test]
    fn list_screen_puts_title_label_first_in_edit_form() {
        let html = post_list_screen(&[article("draft")], "token");
        let form_start = html.find("<form id=\"edit-3\"").unwrap();
        let first_label = html[form_start..].find("<label>").unwrap();
        let first_input = html[form_start..].find("<input").unwrap();
        assert!(first_label < first_input);
        assert!(html.contains("Tom &amp; Jerry"));
        assert!(html.contains(QUICK_EDIT_SCRIPT_URL));
        assert!(html.contains("hidden_post_status\">draft</div>"));
    }
}
