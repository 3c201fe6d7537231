//! Smooth in-page scrolling to a section anchor.

use log::debug;
use thiserror::Error;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScrollError {
    #[error("no document available")]
    NoDocument,
    #[error("no section with id `{0}`")]
    NotFound(String),
}

/// Something that can bring a section into view.
pub trait Viewport {
    fn reveal(&self, section_id: &str) -> Result<(), ScrollError>;
}

/// The live browser page.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DocumentViewport;

impl Viewport for DocumentViewport {
    fn reveal(&self, section_id: &str) -> Result<(), ScrollError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ScrollError::NoDocument)?;
        let element = document
            .get_element_by_id(section_id)
            .ok_or_else(|| ScrollError::NotFound(section_id.to_string()))?;

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
}

/// Scrolls to `section_id` if it exists. A missing section is ignored so the
/// visitor never sees a broken state.
pub fn scroll_to(viewport: &impl Viewport, section_id: &str) {
    match viewport.reveal(section_id) {
        Ok(()) => debug!("Scrolled to section {}", section_id),
        Err(e) => debug!("Skipping scroll: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeViewport {
        sections: Vec<&'static str>,
        revealed: RefCell<Vec<String>>,
    }

    impl FakeViewport {
        fn with_sections(sections: &[&'static str]) -> Self {
            Self {
                sections: sections.to_vec(),
                revealed: RefCell::new(Vec::new()),
            }
        }
    }

    impl Viewport for FakeViewport {
        fn reveal(&self, section_id: &str) -> Result<(), ScrollError> {
            if !self.sections.contains(&section_id) {
                return Err(ScrollError::NotFound(section_id.to_string()));
            }
            self.revealed.borrow_mut().push(section_id.to_string());
            Ok(())
        }
    }

    #[test]
    fn known_section_is_revealed() {
        let viewport = FakeViewport::with_sections(&crate::config::SECTIONS);
        scroll_to(&viewport, "contact");
        assert_eq!(*viewport.revealed.borrow(), vec!["contact".to_string()]);
    }

    #[test]
    fn unknown_section_is_silent_no_op() {
        let viewport = FakeViewport::with_sections(&crate::config::SECTIONS);
        scroll_to(&viewport, "nonexistent");
        assert!(viewport.revealed.borrow().is_empty());
    }

    #[test]
    fn not_found_names_the_section() {
        let viewport = FakeViewport::with_sections(&[]);
        assert_eq!(
            viewport.reveal("pricing"),
            Err(ScrollError::NotFound("pricing".to_string()))
        );
        assert_eq!(
            ScrollError::NotFound("pricing".to_string()).to_string(),
            "no section with id `pricing`"
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn missing_anchor_reports_not_found() {
        assert_eq!(
            DocumentViewport.reveal("nonexistent"),
            Err(ScrollError::NotFound("nonexistent".to_string()))
        );
        scroll_to(&DocumentViewport, "nonexistent");
    }

    #[wasm_bindgen_test]
    fn existing_anchor_is_revealed() {
        let document = web_sys::window().unwrap().document().unwrap();
        let section = document.create_element("section").unwrap();
        section.set_id("contact");
        document.body().unwrap().append_child(&section).unwrap();

        assert_eq!(DocumentViewport.reveal("contact"), Ok(()));

        section.remove();
    }
}
