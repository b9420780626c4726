// Parse module tests.

use super::*;
use scraper::Html;

fn doc(html: &str) -> Html {
    Html::parse_document(html)
}

#[test]
fn test_title_basic() {
    let document = doc(r#"<html><head><title>Test Page</title></head><body></body></html>"#);
    assert_eq!(title_element_text(&document), Some("Test Page".to_string()));
}

#[test]
fn test_title_with_whitespace() {
    // Common gotcha: titles with extra whitespace/newlines
    let document = doc(
        r#"<html><head><title>
        Test Page
    </title></head></html>"#,
    );
    assert_eq!(extract_meta_tags(&document).title, Some("Test Page".to_string()));
}

#[test]
fn test_title_with_html_entities() {
    let document = doc(r#"<html><head><title>Fish &amp; Chips</title></head></html>"#);
    assert_eq!(extract_meta_tags(&document).title, Some("Fish & Chips".to_string()));
}

#[test]
fn test_title_multiple_tags_uses_first() {
    let document = doc(r#"<html><head><title>First</title><title>Second</title></head></html>"#);
    assert_eq!(extract_meta_tags(&document).title, Some("First".to_string()));
}

#[test]
fn test_title_falls_back_to_og_title() {
    let document = doc(
        r#"<html><head><meta property="og:title" content="From Open Graph"></head></html>"#,
    );
    assert_eq!(
        extract_meta_tags(&document).title,
        Some("From Open Graph".to_string())
    );
}

#[test]
fn test_empty_title_falls_back_to_og_title() {
    let document = doc(
        r#"<html><head><title>   </title><meta property="og:title" content="OG"></head></html>"#,
    );
    assert_eq!(extract_meta_tags(&document).title, Some("OG".to_string()));
}

#[test]
fn test_title_prefers_title_element_over_og() {
    let document = doc(
        r#"<html><head><title>Element</title><meta property="og:title" content="OG"></head></html>"#,
    );
    assert_eq!(extract_meta_tags(&document).title, Some("Element".to_string()));
}

#[test]
fn test_title_missing_everywhere() {
    let document = doc(r#"<html><head></head><body></body></html>"#);
    assert_eq!(extract_meta_tags(&document).title, None);
}

#[test]
fn test_description_chain() {
    let both = doc(
        r#"<html><head>
            <meta name="description" content="  Meta description  ">
            <meta property="og:description" content="OG description">
        </head></html>"#,
    );
    assert_eq!(
        extract_meta_tags(&both).description,
        Some("Meta description".to_string())
    );

    let og_only = doc(
        r#"<html><head><meta property="og:description" content="OG description"></head></html>"#,
    );
    assert_eq!(
        extract_meta_tags(&og_only).description,
        Some("OG description".to_string())
    );

    let empty_meta = doc(
        r#"<html><head>
            <meta name="description" content="">
            <meta property="og:description" content="OG description">
        </head></html>"#,
    );
    assert_eq!(
        extract_meta_tags(&empty_meta).description,
        Some("OG description".to_string())
    );
}

#[test]
fn test_first_match_evaluates_in_order() {
    fn never(_: &Html) -> Option<String> {
        None
    }
    fn first(_: &Html) -> Option<String> {
        Some("first".to_string())
    }
    fn second(_: &Html) -> Option<String> {
        Some("second".to_string())
    }

    let document = doc("<html></html>");
    assert_eq!(
        first_match(&document, &[never, first, second]),
        Some("first".to_string())
    );
    assert_eq!(first_match(&document, &[never]), None);
    assert_eq!(first_match(&document, &[]), None);
}

#[test]
fn test_meta_tags_all_fields() {
    let document = doc(
        r#"<html><head>
            <meta charset="UTF-8">
            <meta name="viewport" content="width=device-width, initial-scale=1">
            <meta name="keywords" content="rust, seo">
            <meta name="robots" content="index, follow">
            <meta name="author" content="Jane Doe">
            <link rel="canonical" href="https://example.com/page">
        </head></html>"#,
    );
    let meta = extract_meta_tags(&document);
    assert_eq!(meta.charset.as_deref(), Some("UTF-8"));
    assert_eq!(
        meta.viewport.as_deref(),
        Some("width=device-width, initial-scale=1")
    );
    assert_eq!(meta.keywords.as_deref(), Some("rust, seo"));
    assert_eq!(meta.robots.as_deref(), Some("index, follow"));
    assert_eq!(meta.author.as_deref(), Some("Jane Doe"));
    assert_eq!(meta.canonical.as_deref(), Some("https://example.com/page"));
}

#[test]
fn test_canonical_ignores_other_link_relations() {
    let document = doc(
        r#"<html><head>
            <link rel="stylesheet" href="/style.css">
            <link rel="alternate" href="https://example.com/fr">
        </head></html>"#,
    );
    assert_eq!(canonical_link(&document), None);
}

#[test]
fn test_open_graph_fields() {
    let document = doc(
        r#"<html><head>
            <meta property="og:title" content="OG Title">
            <meta property="og:description" content="OG Description">
            <meta property="og:image" content="https://example.com/card.png">
            <meta property="og:url" content="https://example.com/">
            <meta property="og:site_name" content="Example">
            <meta property="og:type" content="article">
        </head></html>"#,
    );
    let og = extract_open_graph(&document);
    assert_eq!(og.title.as_deref(), Some("OG Title"));
    assert_eq!(og.description.as_deref(), Some("OG Description"));
    assert_eq!(og.image.as_deref(), Some("https://example.com/card.png"));
    assert_eq!(og.url.as_deref(), Some("https://example.com/"));
    assert_eq!(og.site_name.as_deref(), Some("Example"));
    assert_eq!(og.kind.as_deref(), Some("article"));
}

#[test]
fn test_open_graph_uses_property_not_name() {
    // og:* lives in the property attribute; name="og:image" is not recognized
    let document = doc(r#"<html><head><meta name="og:image" content="x.png"></head></html>"#);
    assert_eq!(og_image(&document), None);
}

#[test]
fn test_twitter_card_fields() {
    let document = doc(
        r#"<html><head>
            <meta name="twitter:card" content="summary_large_image">
            <meta name="twitter:title" content="TW Title">
            <meta name="twitter:description" content="TW Description">
            <meta name="twitter:image" content="https://example.com/tw.png">
            <meta name="twitter:creator" content="@example">
        </head></html>"#,
    );
    let twitter = extract_twitter_card(&document);
    assert_eq!(twitter.card.as_deref(), Some("summary_large_image"));
    assert_eq!(twitter.title.as_deref(), Some("TW Title"));
    assert_eq!(twitter.description.as_deref(), Some("TW Description"));
    assert_eq!(twitter.image.as_deref(), Some("https://example.com/tw.png"));
    assert_eq!(twitter.creator.as_deref(), Some("@example"));
}

#[test]
fn test_twitter_card_has_no_og_fallback() {
    let document = doc(r#"<html><head><meta property="og:title" content="OG"></head></html>"#);
    assert_eq!(extract_twitter_card(&document).title, None);
}

#[test]
fn test_headings_in_document_order() {
    let document = doc(
        r#"<html><body>
            <h2>Second level A</h2>
            <h1>  Main heading  </h1>
            <h3>Third</h3>
            <h2>Second level B</h2>
        </body></html>"#,
    );
    let content = extract_content(&document);
    assert_eq!(content.h1, vec!["Main heading"]);
    assert_eq!(content.h2, vec!["Second level A", "Second level B"]);
    assert_eq!(content.h3, vec!["Third"]);
}

#[test]
fn test_heading_text_includes_nested_elements() {
    let document = doc(r#"<html><body><h1>Hello <em>big</em> world</h1></body></html>"#);
    assert_eq!(extract_content(&document).h1, vec!["Hello big world"]);
}

#[test]
fn test_word_count_collapses_whitespace() {
    let document = doc(
        "<html><body><p>One   two\n\nthree</p>\t<div>four <span>five</span></div></body></html>",
    );
    assert_eq!(count_words(&document), 5);
}

#[test]
fn test_word_count_joins_adjacent_inline_text() {
    // Text nodes are concatenated before splitting, so "foo<b>bar</b>" is one word
    let document = doc("<html><body><p>foo<b>bar</b></p></body></html>");
    assert_eq!(count_words(&document), 1);
}

#[test]
fn test_word_count_ignores_scripts_and_styles() {
    let document = doc(
        r#"<html><body>
            <p>Visible words here</p>
            <script>var hidden = "not counted at all";</script>
            <style>body { color: red; }</style>
            <noscript>Enable JavaScript</noscript>
        </body></html>"#,
    );
    assert_eq!(count_words(&document), 3);
}

#[test]
fn test_word_count_ignores_head() {
    let document = doc(r#"<html><head><title>Many title words here</title></head><body>Body</body></html>"#);
    assert_eq!(count_words(&document), 1);
}

#[test]
fn test_word_count_empty_body() {
    let document = doc("<html><body>   </body></html>");
    assert_eq!(count_words(&document), 0);
    assert_eq!(count_words(&doc("")), 0);
}

#[test]
fn test_count_images_alt_text() {
    let document = doc(
        r#"<html><body>
            <img src="a.png" alt="A described image">
            <img src="b.png" alt="">
            <img src="c.png" alt="   ">
            <img src="d.png">
        </body></html>"#,
    );
    assert_eq!(count_images(&document), (4, 3));
}

#[test]
fn test_count_images_none() {
    let document = doc("<html><body><p>No images</p></body></html>");
    let content = extract_content(&document);
    assert_eq!(content.image_count, 0);
    assert_eq!(content.images_without_alt, 0);
}

#[test]
fn test_visible_body_text_order() {
    let document = doc("<html><body><p>alpha</p><p>beta</p></body></html>");
    assert_eq!(visible_body_text(&document), "alphabeta");
}

mod invariants {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_images_without_alt_never_exceeds_count(
            alts in prop::collection::vec(prop::option::of("[ a-z]{0,8}"), 0..20),
            filler in "[a-z <>/]{0,40}"
        ) {
            let mut html = String::from("<html><body>");
            for alt in &alts {
                match alt {
                    Some(alt) => html.push_str(&format!(r#"<img src="x.png" alt="{}">"#, alt)),
                    None => html.push_str(r#"<img src="x.png">"#),
                }
                html.push_str(&filler);
            }
            html.push_str("</body></html>");

            let (total, missing) = count_images(&Html::parse_document(&html));
            prop_assert!(missing <= total);
        }

        #[test]
        fn test_extraction_never_panics(input in ".{0,300}") {
            let document = Html::parse_document(&input);
            let content = extract_content(&document);
            prop_assert!(content.images_without_alt <= content.image_count);
            let _ = extract_meta_tags(&document);
            let _ = extract_open_graph(&document);
            let _ = extract_twitter_card(&document);
        }
    }
}
