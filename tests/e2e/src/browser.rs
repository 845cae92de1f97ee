use anyhow::Result;
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .build()?;

        let browser = ChromeBrowser::new(options)?;

        Ok(Self { browser })
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        Ok(Page { tab })
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    pub fn text(&self, selector: &str) -> Result<String> {
        let element = self.tab.wait_for_element(selector)?;
        let text = element.get_inner_text()?;
        Ok(text)
    }

    pub fn texts(&self, selector: &str) -> Result<Vec<String>> {
        self.tab
            .wait_for_elements(selector)?
            .iter()
            .map(|element| Ok(element.get_inner_text()?))
            .collect()
    }

    pub fn type_text(&self, selector: &str, text: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        element.type_into(text)?;
        Ok(())
    }

    pub fn click(&self, selector: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        Ok(())
    }

    /// Evaluates a JS expression and returns its JSON value.
    pub fn eval(&self, expression: &str) -> Result<serde_json::Value> {
        let result = self.tab.evaluate(expression, false)?;
        Ok(result.value.unwrap_or(serde_json::Value::Null))
    }

    /// Polls until `selector`'s text contains `needle`.
    pub fn wait_for_text(&self, selector: &str, needle: &str, timeout: Duration) -> Result<String> {
        let started = Instant::now();
        loop {
            if let Ok(text) = self.text(selector) {
                if text.contains(needle) {
                    return Ok(text);
                }
            }
            if started.elapsed() > timeout {
                anyhow::bail!("{selector} never contained {needle:?}");
            }
            std::thread::sleep(Duration::from_millis(50));
        }
    }
}
