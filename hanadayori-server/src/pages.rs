//! Server-rendered pages. All user text goes through maud's escaping.

use hanadayori_core::FlowerKind;
use hanadayori_core::api::routes::{api, pages};
use hanadayori_model::CardState;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use url::form_urlencoded;

const SITE_NAME: &str = "花便り";
const CSS: &str = r#"
body {
  margin: 0; font-family: "Hiragino Mincho ProN", serif;
  background: #faf7f5; color: #3d3434;
}
header, footer { background: #fff; padding: 1rem; text-align: center; }
main { max-width: 28rem; margin: 2rem auto; padding: 0 1rem; }
.card {
  background: #fff; border-radius: 1rem; overflow: hidden;
  box-shadow: 0 4px 16px rgba(0,0,0,.08);
}
.card img { display: block; width: 100%; height: auto; }
.card summary {
  cursor: pointer; padding: 1rem; text-align: center;
  font-weight: bold; color: #c2477a;
}
.message { white-space: pre-wrap; line-height: 1.8; padding: 0 1.5rem 1.5rem; }
.credit { font-size: .8rem; color: #8a7f7f; padding: .5rem 1rem; }
.kinds {
  list-style: none; padding: 0; display: flex; flex-wrap: wrap; gap: .5rem;
}
.kinds li { background: #fff; border-radius: 999px; padding: .25rem .75rem; }
"#;

/// Renders the base HTML document structure.
fn base_document(title: &str, head_extra: Markup, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ja" {
            head {
                meta charset="UTF-8";
                meta
                    name="viewport"
                    content="width=device-width, initial-scale=1.0";
                title { (title) }
                (head_extra)
                style { (PreEscaped(CSS)) }
            }
            body {
                header {
                    a href=(pages::HOME) { (SITE_NAME) }
                }
                main { (content) }
                footer {
                    "Photos provided by "
                    a
                        href="https://www.pexels.com"
                        target="_blank"
                        rel="noopener noreferrer"
                    {
                        "Pexels"
                    }
                }
            }
        }
    }
}

/// Viewer page for a decoded card.
///
/// The message sits in a `details` element so it opens on the recipient's
/// tap; line breaks survive through `white-space: pre-wrap`.
pub fn card_page(card: &CardState) -> Markup {
    let head = html! {
        meta
            name="description"
            content="大切な人から花のメッセージが届きました";
        meta property="og:title" content="花のメッセージが届きました";
        meta property="og:image" content=(card.image_url);
    };

    let content = html! {
        article.card {
            img src=(card.image_url) alt="花の写真";
            details {
                summary { "メッセージを読む" }
                p.message { (card.message) }
            }
            @if !card.photographer.is_empty() {
                p.credit { "Photo by " (card.photographer) " on Pexels" }
            }
        }
        p {
            "お返しの花便りを作成してみますか？ "
            a href=(pages::HOME) { "花便りを作成する" }
        }
    };

    base_document("花のメッセージが届きました | 花便り", head, content)
}

fn search_href(kind: &FlowerKind) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("query", &kind.query())
        .finish();
    format!("{}?{query}", api::images::SEARCH)
}

/// Creation entry point listing the flower catalog.
pub fn home_page(kinds: &[FlowerKind]) -> Markup {
    let content = html! {
        h1 { "美しい花の写真で、大切な人にメッセージを" }
        p { "花を選んで、メッセージを書いて、リンクを送りましょう。" }
        ul.kinds {
            @for kind in kinds {
                li {
                    a href=(search_href(kind)) {
                        (kind.label)
                    }
                }
            }
        }
    };

    base_document("花便り - 美しい花のメッセージカード", html! {}, content)
}
