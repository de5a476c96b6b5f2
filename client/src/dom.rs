//! DOM side of the render pass
//!
//! Each card becomes:
//!
//! ```html
//! <div class="student-card">
//!   <img class="student-icon" src="images/student/icon/{id}.webp" alt="{name}">
//!   <div class="student-name">{name}</div>
//!   <div class="student-school">{school}</div>
//! </div>
//! ```

use roster_core::{Card, CardImage, CardSink, RosterError, RosterResult};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlImageElement};

use crate::loader::describe;

pub const CARD_CLASS: &str = "student-card";
pub const ICON_CLASS: &str = "student-icon";
pub const NAME_CLASS: &str = "student-name";
pub const SCHOOL_CLASS: &str = "student-school";

/// The page element that receives the cards. Only ever appended to.
pub struct DomContainer {
    document: Document,
    container: Element,
}

impl DomContainer {
    pub fn find(container_id: &str) -> RosterResult<Self> {
        let missing = || RosterError::MissingContainer(container_id.to_string());
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(missing)?;
        let container = document.get_element_by_id(container_id).ok_or_else(missing)?;
        Ok(Self {
            document,
            container,
        })
    }

    pub fn element(&self) -> &Element {
        &self.container
    }

    fn build_card(&self, card: Card) -> Result<Element, JsValue> {
        let root = self.document.create_element("div")?;
        root.set_class_name(CARD_CLASS);

        let img: HtmlImageElement = self.document.create_element("img")?.dyn_into()?;
        img.set_class_name(ICON_CLASS);
        img.set_alt(&card.name);
        img.set_src(card.image.src());
        install_fallback(&img, card.image);
        root.append_child(&img)?;

        let name = self.document.create_element("div")?;
        name.set_class_name(NAME_CLASS);
        name.set_text_content(Some(&card.name));
        root.append_child(&name)?;

        let school = self.document.create_element("div")?;
        school.set_class_name(SCHOOL_CLASS);
        school.set_text_content(Some(&card.school));
        root.append_child(&school)?;

        Ok(root)
    }
}

impl CardSink for DomContainer {
    fn append(&mut self, card: Card) -> RosterResult<()> {
        let element = self
            .build_card(card)
            .map_err(|e| RosterError::Attach(describe(e)))?;
        self.container
            .append_child(&element)
            .map_err(|e| RosterError::Attach(describe(e)))?;
        Ok(())
    }
}

/// Hook the image's `onerror` to the card's fallback state. The first
/// failure swaps to the portrait; after that the hook removes itself.
fn install_fallback(img: &HtmlImageElement, mut image: CardImage) {
    let target = img.clone();
    let on_error = Closure::<dyn FnMut()>::new(move || match image.on_load_error() {
        Some(src) => {
            log::debug!("icon failed to load, falling back to {}", src);
            target.set_src(src);
        }
        None => target.set_onerror(None),
    });
    img.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    // Lives as long as the element
    on_error.forget();
}
