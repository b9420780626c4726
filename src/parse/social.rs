//! Open Graph and Twitter Card extraction.
//!
//! Each property is a direct lookup of one meta tag; there are no fallbacks
//! between the two vocabularies here.

use scraper::Html;

use super::rules::attribute_rule;
use crate::models::{OpenGraph, TwitterCard};

attribute_rule!(og_title, "meta[property='og:title']", "content");
attribute_rule!(og_description, "meta[property='og:description']", "content");
attribute_rule!(og_image, "meta[property='og:image']", "content");
attribute_rule!(og_url, "meta[property='og:url']", "content");
attribute_rule!(og_site_name, "meta[property='og:site_name']", "content");
attribute_rule!(og_type, "meta[property='og:type']", "content");

attribute_rule!(twitter_card, "meta[name='twitter:card']", "content");
attribute_rule!(twitter_title, "meta[name='twitter:title']", "content");
attribute_rule!(twitter_description, "meta[name='twitter:description']", "content");
attribute_rule!(twitter_image, "meta[name='twitter:image']", "content");
attribute_rule!(twitter_creator, "meta[name='twitter:creator']", "content");

/// Extracts the Open Graph properties of a document.
pub fn extract_open_graph(document: &Html) -> OpenGraph {
    OpenGraph {
        title: og_title(document),
        description: og_description(document),
        image: og_image(document),
        url: og_url(document),
        site_name: og_site_name(document),
        kind: og_type(document),
    }
}

/// Extracts the Twitter Card properties of a document.
pub fn extract_twitter_card(document: &Html) -> TwitterCard {
    TwitterCard {
        card: twitter_card(document),
        title: twitter_title(document),
        description: twitter_description(document),
        image: twitter_image(document),
        creator: twitter_creator(document),
    }
}
