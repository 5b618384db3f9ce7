//! Main diff engine that orchestrates the entire diff process

use std::collections::HashMap;

use log::debug;

use crate::algorithm::snake::SnakeScratch;
use crate::algorithm::Region;
use crate::config::DiffConfig;
use crate::error::DiffError;
use crate::script::EditScript;
use crate::strategy::{
    CommonSes, DiffStrategy, PatienceDiff, PreserveStructure, COMMON_SES, PATIENCE_DIFF,
    PRESERVE_STRUCTURE,
};
use crate::tokenizers::tokenize_pair;
use crate::toolbox::Toolbox;
use crate::trim::{trim_common_affixes, Trimmed};

/// The main diff engine: a strategy registry plus the reusable middle-snake
/// scratch buffers.
///
/// One engine handles one diff at a time (`diff` takes `&mut self` because
/// of the scratch buffers); run concurrent diffs on distinct engines.
pub struct DiffEngine {
    strategies: HashMap<String, Box<dyn DiffStrategy>>,
    scratch: SnakeScratch,
}

impl DiffEngine {
    /// Create an engine with the built-in strategies registered.
    pub fn new() -> Self {
        let mut engine = Self {
            strategies: HashMap::new(),
            scratch: SnakeScratch::new(),
        };
        engine.register_strategy(COMMON_SES, Box::new(CommonSes));
        engine.register_strategy(PATIENCE_DIFF, Box::new(PatienceDiff));
        engine.register_strategy(PRESERVE_STRUCTURE, Box::new(PreserveStructure));
        engine
    }

    /// Register (or replace) a strategy under `name`.
    pub fn register_strategy(&mut self, name: impl Into<String>, strategy: Box<dyn DiffStrategy>) {
        self.strategies.insert(name.into(), strategy);
    }

    /// Names of all registered strategies, sorted.
    pub fn strategy_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.strategies.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Compute the edit script turning `old` into `new`.
    ///
    /// The steps:
    /// 1. Tokenize both inputs into shared integer symbols
    /// 2. Trim the common prefix and suffix (unless suppressed)
    /// 3. Hand the interior window to the configured strategy
    /// 4. Concatenate prefix, strategy body and suffix
    ///
    /// `debug` only enables diagnostic tracing; it never changes the
    /// output. `options` merges over the defaults (pass `None` for a fully
    /// default run).
    pub fn diff(
        &mut self,
        old: &[String],
        new: &[String],
        debug: bool,
        options: Option<DiffConfig>,
    ) -> Result<EditScript, DiffError> {
        let config = options.unwrap_or_default();

        let (old_symbols, new_symbols, table) = tokenize_pair(old, new);

        let trimmed = if config.skip_trimming {
            Trimmed::full(&old_symbols, &new_symbols)
        } else {
            trim_common_affixes(&old_symbols, &new_symbols)
        };

        let strategy = self
            .strategies
            .get(&config.strategy_name)
            .ok_or_else(|| DiffError::UnknownStrategy(config.strategy_name.clone()))?;

        let window = Region::new(trimmed.old_window.clone(), trimmed.new_window.clone());
        if debug {
            debug!(
                "running {:?} on a {}x{} window ({} prefix, {} suffix tokens trimmed)",
                config.strategy_name,
                window.old_len(),
                window.new_len(),
                trimmed.prefix.len(),
                trimmed.suffix.len()
            );
        }

        let mut toolbox = Toolbox::new(
            &old_symbols,
            &new_symbols,
            &config,
            debug,
            &mut self.scratch,
        );
        let body = strategy.compute(&mut toolbox, window)?;

        let mut raw = trimmed.prefix;
        raw.extend(body);
        raw.extend(trimmed.suffix);
        Ok(EditScript::from_raw(&raw, &table))
    }
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::new()
    }
}
