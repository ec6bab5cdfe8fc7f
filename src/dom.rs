use lib_2048::{FrontendConfig, ScoreView};
use log::debug;
use web_sys::{Document, Element};

/// Score, best score and status text on the page. Elements the page does not
/// have are skipped.
pub struct Scoreboard {
    score: Option<Element>,
    best: Option<Element>,
    status: Option<Element>,
}

fn lookup(document: &Document, id: &str) -> Option<Element> {
    let element = document.get_element_by_id(id);

    if element.is_none() {
        debug!("no #{id} element on the page");
    }

    element
}

impl Scoreboard {
    pub fn new(document: &Document, config: &FrontendConfig) -> Self {
        Self {
            score: lookup(document, &config.score_element),
            best: lookup(document, &config.best_element),
            status: lookup(document, &config.status_element),
        }
    }
}

impl ScoreView for Scoreboard {
    fn show_score(&self, score: u32) {
        if let Some(element) = &self.score {
            element.set_text_content(Some(&score.to_string()));
        }
    }

    fn show_best(&self, best: u32) {
        if let Some(element) = &self.best {
            element.set_text_content(Some(&best.to_string()));
        }
    }

    fn show_status(&self, status: &str) {
        if let Some(element) = &self.status {
            element.set_text_content(Some(status));
        }
    }
}
