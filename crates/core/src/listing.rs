//! Listing-page extraction.
//!
//! Locates the photo-search container on an album page and turns every
//! image card inside it into a candidate record, in document order.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::constants::NO_DESCRIPTION;
use crate::fields::parse_description;
use crate::livery::{LiveryFields, NewLivery};

/// Structural path from the page root to the photo-search section.
pub const LISTING_CONTAINER_SELECTOR: &str = "#layout-page > div.layout-body > section > section.layout-main-content.layout-has-sidebar > section > section > div > section.photo-search-v2";

const CARD_CLASS: &str = "card-image";
const CARD_BODY_CLASS: &str = "card-body";

#[expect(clippy::unwrap_used, reason = "static selector is compile-time validated")]
static CONTAINER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(LISTING_CONTAINER_SELECTOR).unwrap());

#[expect(clippy::unwrap_used, reason = "static selector is compile-time validated")]
static CARD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.card-image").unwrap());

#[expect(clippy::unwrap_used, reason = "static selector is compile-time validated")]
static IMAGE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").unwrap());

/// Extracts candidates from raw page bytes. Invalid UTF-8 is replaced, not rejected.
#[must_use]
pub fn extract_candidates(markup: &[u8]) -> Vec<NewLivery> {
    extract_candidates_from_str(&String::from_utf8_lossy(markup))
}

/// Extracts candidates from page markup.
///
/// A page without the listing container has no entries; cards without an
/// image (or an image without `src`) are skipped.
#[must_use]
pub fn extract_candidates_from_str(markup: &str) -> Vec<NewLivery> {
    let document = Html::parse_document(markup);
    let Some(container) = document.select(&CONTAINER).next() else {
        tracing::debug!("listing container not found");
        return Vec::new();
    };

    container.select(&CARD).filter_map(candidate_from_card).collect()
}

fn candidate_from_card(card: ElementRef<'_>) -> Option<NewLivery> {
    let img = card.select(&IMAGE).next()?;
    let Some(image_url) = img.value().attr("src") else {
        tracing::debug!(class = CARD_CLASS, "image without src skipped");
        return None;
    };

    let candidate = match description_block(card) {
        Some(body) => {
            let description = stripped_text(body);
            NewLivery::new(parse_description(&description), image_url, description)
        },
        None => {
            let description = img.value().attr("alt").unwrap_or(NO_DESCRIPTION);
            NewLivery::new(LiveryFields::unknown(), image_url, description)
        },
    };
    Some(candidate)
}

/// First later sibling of the card that is a `div.card-body`, not
/// necessarily the adjacent one. A card with no body of its own picks up
/// the next card's.
fn description_block(card: ElementRef<'_>) -> Option<ElementRef<'_>> {
    card.next_siblings().filter_map(ElementRef::wrap).find(|el| {
        el.value().name() == "div" && el.value().classes().any(|c| c == CARD_BODY_CLASS)
    })
}

/// Text nodes trimmed individually, empties dropped, joined without a separator.
fn stripped_text(el: ElementRef<'_>) -> String {
    el.text().map(str::trim).filter(|t| !t.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(cards: &str) -> String {
        format!(
            r#"<html><body>
            <div id="layout-page">
              <div class="layout-body">
                <section>
                  <section class="layout-main-content layout-has-sidebar">
                    <section>
                      <section>
                        <div>
                          <section class="photo-search-v2">{cards}</section>
                        </div>
                      </section>
                    </section>
                  </section>
                </section>
              </div>
            </div>
            </body></html>"#
        )
    }

    #[test]
    fn card_with_body_is_parsed() {
        let html = page(
            r#"<div class="card-image"><a href="/photo/1"><img src="https://img.example/1.jpg" alt="alt"></a></div>
               <div class="card-body">Delta Air Lines REG:N123DL Boeing 737-800 Atlanta-USA(KATL)</div>"#,
        );
        let candidates = extract_candidates(html.as_bytes());
        assert_eq!(candidates.len(), 1);
        let c = &candidates[0];
        assert_eq!(c.image_url, "https://img.example/1.jpg");
        assert_eq!(c.airline(), "Delta Air Lines");
        assert_eq!(c.registration(), "N123DL");
        assert_eq!(c.aircraft_model(), "Boeing 737-800");
        assert_eq!(c.location(), "Atlanta-USA(");
    }

    #[test]
    fn body_text_fragments_are_stripped_and_joined() {
        let html = page(
            r#"<div class="card-image"><img src="a.jpg"></div>
               <div class="card-body">
                 <span> KLM </span>
                 <span>REG:PH-BXA</span>
               </div>"#,
        );
        let candidates = extract_candidates_from_str(&html);
        assert_eq!(candidates[0].description, "KLMREG:PH-BXA");
        assert_eq!(candidates[0].airline(), "KLM");
        assert_eq!(candidates[0].registration(), "PH-BXA");
    }

    #[test]
    fn card_without_body_uses_alt_and_uniform_unknown() {
        let html = page(r#"<div class="card-image"><img src="b.jpg" alt="Some livery"></div>"#);
        let candidates = extract_candidates_from_str(&html);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].description, "Some livery");
        assert_eq!(candidates[0].fields, LiveryFields::unknown());
    }

    #[test]
    fn card_without_body_or_alt_uses_no_description() {
        let html = page(r#"<div class="card-image"><img src="c.jpg"></div>"#);
        let candidates = extract_candidates_from_str(&html);
        assert_eq!(candidates[0].description, "No Description");
        assert_eq!(candidates[0].airline(), "Unknown");
    }

    #[test]
    fn card_without_image_is_skipped() {
        let html = page(
            r#"<div class="card-image"><span>no image</span></div>
               <div class="card-body">KLM REG:PH-BXA</div>
               <div class="card-image"><img src="d.jpg"></div>"#,
        );
        let candidates = extract_candidates_from_str(&html);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].image_url, "d.jpg");
    }

    #[test]
    fn image_without_src_is_skipped() {
        let html = page(r#"<div class="card-image"><img alt="lazy"></div>"#);
        assert!(extract_candidates_from_str(&html).is_empty());
    }

    #[test]
    fn candidates_keep_document_order() {
        let html = page(
            r#"<div class="card-image"><img src="1.jpg"></div><div class="card-body">A REG:R1</div>
               <div class="card-image"><img src="2.jpg"></div><div class="card-body">B REG:R2</div>
               <div class="card-image"><img src="3.jpg"></div><div class="card-body">C REG:R3</div>"#,
        );
        let urls: Vec<_> =
            extract_candidates_from_str(&html).into_iter().map(|c| c.image_url).collect();
        assert_eq!(urls, vec!["1.jpg", "2.jpg", "3.jpg"]);
    }

    #[test]
    fn missing_container_yields_no_candidates() {
        let html = r#"<html><body><div class="card-image"><img src="x.jpg"></div></body></html>"#;
        assert!(extract_candidates_from_str(html).is_empty());
    }

    #[test]
    fn container_without_cards_yields_no_candidates() {
        assert!(extract_candidates_from_str(&page("<p>Nothing here</p>")).is_empty());
    }

    #[test]
    fn non_utf8_bytes_are_tolerated() {
        let mut bytes = page(r#"<div class="card-image"><img src="e.jpg"></div>"#).into_bytes();
        bytes.extend_from_slice(&[0xff, 0xfe]);
        assert_eq!(extract_candidates(&bytes).len(), 1);
    }

    #[test]
    fn bodyless_card_takes_the_next_card_body() {
        let html = page(
            r#"<div class="card-image"><img src="1.jpg" alt="first"></div>
               <div class="card-image"><img src="2.jpg"></div>
               <div class="card-body">KLM REG:PH-BXA Boeing 737-800</div>"#,
        );
        let candidates = extract_candidates_from_str(&html);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].image_url, "1.jpg");
        assert_eq!(candidates[0].description, "KLM REG:PH-BXA Boeing 737-800");
        assert_eq!(candidates[0].registration(), "PH-BXA");
        assert_eq!(candidates[1].registration(), "PH-BXA");
    }

    #[test]
    fn body_is_found_past_unrelated_siblings() {
        let html = page(
            r#"<div class="card-image"><img src="1.jpg"></div>
               <span class="card-body">not a div</span>
               <div class="card-footer">footer</div>
               <div class="card-body">Delta Air Lines REG:N123DL</div>"#,
        );
        let candidates = extract_candidates_from_str(&html);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].airline(), "Delta Air Lines");
        assert_eq!(candidates[0].registration(), "N123DL");
    }
}
