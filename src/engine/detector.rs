// Thu Oct 15 2026 - Alex

use crate::engine::targets::ENGINE_INDICATORS;
use log::debug;

pub struct EngineDetector {
    indicators: &'static [&'static str],
}

impl EngineDetector {
    pub fn new() -> Self {
        Self {
            indicators: ENGINE_INDICATORS,
        }
    }

    /// Returns the first indicator matched by any entry name. Only names are
    /// inspected; no entry content is read.
    pub fn detect<'a, I>(&self, names: I) -> Option<&'static str>
    where
        I: IntoIterator<Item = &'a String> + Clone,
    {
        for &indicator in self.indicators {
            if names.clone().into_iter().any(|name| Self::matches(name, indicator)) {
                debug!("Engine indicator matched: {}", indicator);
                return Some(indicator);
            }
        }
        None
    }

    pub fn is_target_engine<'a, I>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = &'a String> + Clone,
    {
        self.detect(names).is_some()
    }

    fn matches(name: &str, indicator: &str) -> bool {
        name == indicator || name.starts_with(indicator)
    }
}

impl Default for EngineDetector {
    fn default() -> Self {
        Self::new()
    }
}
