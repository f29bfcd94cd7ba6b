// Hero headline typed out one character at a time, appended to whatever the
// element already shows.

use crate::{dom, schedule};
use wasm_bindgen::JsValue;
use web_sys::Document;

pub const DEFAULT_TEXT: &str = "Delivering Results.";
pub const START_DELAY_MS: i32 = 2000;
pub const CHAR_DELAY_MS: i32 = 100;

pub struct Typewriter {
    text: String,
    shown: usize,
    display: String,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Typewriter::appending_to("", text)
    }

    // Types after `existing` instead of replacing it
    pub fn appending_to(existing: &str, text: impl Into<String>) -> Self {
        Typewriter {
            text: text.into(),
            shown: 0,
            display: existing.to_string(),
        }
    }

    /// Reveals one more character and returns the full content the element
    /// should show, or `None` once the whole text is out.
    pub fn next(&mut self) -> Option<&str> {
        let c = self.text[self.shown..].chars().next()?;
        self.shown += c.len_utf8();
        self.display.push(c);
        Some(self.display.as_str())
    }

    pub fn is_done(&self) -> bool {
        self.shown == self.text.len()
    }
}

pub fn attach(document: &Document) -> Result<(), JsValue> {
    let element = match dom::select(document, "#typing") {
        Some(el) => el,
        None => return Ok(()),
    };
    let text = element
        .get_attribute("data-text")
        .unwrap_or_else(|| DEFAULT_TEXT.to_string());
    let existing = element.text_content().unwrap_or_default();
    let mut typewriter = Typewriter::appending_to(&existing, text);

    // First character lands on the delay itself, the rest every CHAR_DELAY_MS
    schedule::after(START_DELAY_MS, move || {
        match typewriter.next() {
            Some(shown) => element.set_text_content(Some(shown)),
            None => return,
        }
        let started = schedule::every(CHAR_DELAY_MS, move || match typewriter.next() {
            Some(shown) => {
                element.set_text_content(Some(shown));
                true
            }
            None => false,
        });
        if let Err(err) = started {
            log::warn!("typewriter timer failed: {:?}", err);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_one_character_per_call() {
        let mut tw = Typewriter::new("Hey");
        assert_eq!(tw.next(), Some("H"));
        assert_eq!(tw.next(), Some("He"));
        assert!(!tw.is_done());
        assert_eq!(tw.next(), Some("Hey"));
        assert!(tw.is_done());
        assert_eq!(tw.next(), None);
    }

    #[test]
    fn default_text_takes_one_call_per_char() {
        let mut tw = Typewriter::new(DEFAULT_TEXT);
        let mut calls = 0;
        while tw.next().is_some() {
            calls += 1;
        }
        assert_eq!(calls, DEFAULT_TEXT.chars().count());
    }

    #[test]
    fn multibyte_characters_stay_whole() {
        let mut tw = Typewriter::new("né→");
        assert_eq!(tw.next(), Some("n"));
        assert_eq!(tw.next(), Some("né"));
        assert_eq!(tw.next(), Some("né→"));
        assert_eq!(tw.next(), None);
    }

    #[test]
    fn keeps_existing_content_in_front() {
        let mut tw = Typewriter::appending_to("> ", "Do");
        assert_eq!(tw.next(), Some("> D"));
        assert_eq!(tw.next(), Some("> Do"));
        assert!(tw.is_done());
        assert_eq!(tw.next(), None);
    }

    #[test]
    fn empty_text_is_done_immediately() {
        let mut tw = Typewriter::new("");
        assert!(tw.is_done());
        assert_eq!(tw.next(), None);
    }
}
