// weather-tools-server/src/registry.rs

use std::collections::BTreeMap;
use std::sync::Arc;
use weather_tools_common::{Plugin, PluginDescription, Tool, ToolDescription};

/// Name-keyed collection; registration happens before the registry is shared.
pub struct Registry<T: ?Sized> {
    entries: BTreeMap<String, Arc<T>>,
}

impl<T: ?Sized> Default for Registry<T> {
    fn default() -> Self {
        Registry { entries: BTreeMap::new() }
    }
}

impl<T: ?Sized> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, name: &str, entry: Arc<T>) -> Result<(), String> {
        if self.entries.contains_key(name) {
            return Err(format!("'{}' is already registered", name));
        }
        self.entries.insert(name.to_string(), entry);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<T>> {
        self.entries.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub type ToolRegistry = Registry<dyn Tool>;
pub type PluginRegistry = Registry<dyn Plugin>;

impl Registry<dyn Tool> {
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Result<(), String> {
        let name = tool.name().to_string();
        self.insert(&name, tool)
    }

    pub fn descriptions(&self) -> Vec<ToolDescription> {
        self.entries.values().map(|t| t.describe()).collect()
    }
}

impl Registry<dyn Plugin> {
    pub fn register(&mut self, plugin: Arc<dyn Plugin>) -> Result<(), String> {
        let name = plugin.name().to_string();
        self.insert(&name, plugin)
    }

    pub fn descriptions(&self) -> Vec<PluginDescription> {
        self.entries
            .values()
            .map(|p| PluginDescription { name: p.name().to_string(), description: p.description().to_string() })
            .collect()
    }
}
