//! Applies [`PanelEvent`]s to the page around the canvas.
//!
//! Elements are looked up by id on every event. A missing element aborts the
//! rest of that one update with a warning; the game keeps running.

use matariki_engine::{PanelEvent, StarInfo};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlImageElement};

const HIDDEN: &str = "hidden";
const NO_STAR_SELECTED: &str = "no-star-selected";

pub struct DomPanels {
    document: Document,
}

impl DomPanels {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn apply(&self, event: &PanelEvent) {
        let result = match event {
            PanelEvent::ShowStarInfo(info) => self.show_star_info(info),
            PanelEvent::HideStarInfo => self.hide_star_info(),
            PanelEvent::Objective(text) => self.set_text("nextStarTitle", text),
            PanelEvent::Progress { discovered, total } => self.progress(*discovered, *total),
            PanelEvent::ShowCompletion => self
                .set_hidden("completionPanel", false)
                .and_then(|_| self.set_hidden("starInfo", true)),
            PanelEvent::HideCompletion => self.set_hidden("completionPanel", true),
            PanelEvent::HintAvailable(on) => self.hint_button(*on),
        };
        if let Err(err) = result {
            log::warn!("panel update {:?} failed: {:?}", event, err);
        }
    }

    fn element(&self, id: &str) -> Result<Element, JsValue> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("missing #{}", id)))
    }

    fn set_hidden(&self, id: &str, hidden: bool) -> Result<(), JsValue> {
        let classes = self.element(id)?.class_list();
        if hidden {
            classes.add_1(HIDDEN)
        } else {
            classes.remove_1(HIDDEN)
        }
    }

    fn set_text(&self, id: &str, text: &str) -> Result<(), JsValue> {
        self.element(id)?.set_text_content(Some(text));
        Ok(())
    }

    /// Replace a section's content with a heading and one paragraph.
    fn set_section(&self, id: &str, heading: &str, body: &str) -> Result<(), JsValue> {
        let section = self.element(id)?;
        section.set_text_content(None);
        let h4 = self.document.create_element("h4")?;
        h4.set_text_content(Some(heading));
        let p = self.document.create_element("p")?;
        p.set_text_content(Some(body));
        section.append_child(&h4)?;
        section.append_child(&p)?;
        section.class_list().remove_1(HIDDEN)
    }

    fn show_star_info(&self, info: &StarInfo) -> Result<(), JsValue> {
        let name: HtmlElement = self.element("starName")?.dyn_into()?;
        name.set_text_content(Some(&info.name));
        name.style().set_property("color", &info.color)?;
        self.set_text("starMeaning", &info.meaning)?;
        self.set_section("starStory", "Traditional Story", &info.story)?;
        self.set_section("starCultural", "Cultural Significance", &info.cultural)?;

        if let Some(src) = &info.image {
            let image: HtmlImageElement = self.element("starImage")?.dyn_into()?;
            image.set_src(src);
            image.set_alt(&info.image_alt());
            self.set_hidden("starImageContent", false)?;
            self.element("starImageContainer")?
                .class_list()
                .remove_1(NO_STAR_SELECTED)?;
        } else {
            self.set_hidden("starImageContent", true)?;
        }

        self.set_hidden("starInfo", false)?;
        self.set_hidden("instructions", true)
    }

    fn hide_star_info(&self) -> Result<(), JsValue> {
        self.set_hidden("starInfo", true)?;
        self.set_hidden("starImageContent", true)?;
        self.element("starImageContainer")?
            .class_list()
            .add_1(NO_STAR_SELECTED)?;
        self.set_hidden("instructions", false)?;
        self.set_hidden("starStory", true)?;
        self.set_hidden("starCultural", true)
    }

    fn progress(&self, discovered: usize, total: usize) -> Result<(), JsValue> {
        let fill: HtmlElement = self.element("progressFill")?.dyn_into()?;
        let percent = PanelEvent::progress_percent(discovered, total);
        fill.style().set_property("width", &format!("{}%", percent))?;
        self.set_text("progressText", &PanelEvent::progress_text(discovered, total))
    }

    fn hint_button(&self, enabled: bool) -> Result<(), JsValue> {
        let button: HtmlButtonElement = self.element("hintBtn")?.dyn_into()?;
        button.set_disabled(!enabled);
        Ok(())
    }
}
