// Configuration module
// Key bindings and settings as filled in by user_config and the command line

use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Key name -> command name
    pub keybindings: HashMap<String, String>,
    pub settings: HashMap<String, ConfigValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Int(i64),
    String(String),
}

impl ConfigValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ConfigValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Int(i) => write!(f, "{}", i),
            ConfigValue::String(s) => write!(f, "{:?}", s),
        }
    }
}

impl Config {
    /// Bind a key name to a command name; a later binding for the same key wins
    pub fn bind(&mut self, key: &str, command: &str) {
        self.keybindings.insert(key.to_owned(), command.to_owned());
    }

    pub fn set(&mut self, key: &str, value: impl Into<ConfigValue>) {
        self.settings.insert(key.to_owned(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.settings.get(key)
    }

    // Typed lookups read a mistyped setting as unset

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key)?.as_int()
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    /// Integer setting converted to `T`; values that do not fit read as unset
    pub fn get_int_as<T: TryFrom<i64>>(&self, key: &str) -> Option<T> {
        T::try_from(self.get_int(key)?).ok()
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Int(i)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_owned())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_binding_wins() {
        let mut config = Config::default();
        config.bind("Enter", "insert-tab");
        config.bind("Enter", "insert-newline");

        assert_eq!(config.keybindings.len(), 1);
        assert_eq!(
            config.keybindings.get("Enter").map(String::as_str),
            Some("insert-newline")
        );
    }

    #[test]
    fn test_typed_lookups() {
        let mut config = Config::default();
        config.set("font_size", 30_i64);
        config.set("font_path", String::from("Fonts/anon.ttf"));

        assert_eq!(config.get_int("font_size"), Some(30));
        assert_eq!(config.get_string("font_path"), Some("Fonts/anon.ttf"));
        assert_eq!(config.get("missing"), None);
    }

    #[test]
    fn test_mistyped_setting_reads_as_unset() {
        let mut config = Config::default();
        config.set("font_size", "large");

        assert_eq!(config.get_int("font_size"), None);
        assert_eq!(config.get_int_as::<u16>("font_size"), None);
    }

    #[test]
    fn test_int_setting_is_not_a_string() {
        let mut config = Config::default();
        config.set("window_title", 7_i64);

        assert_eq!(config.get_string("window_title"), None);
        assert_eq!(config.get_int("window_title"), Some(7));
    }

    #[test]
    fn test_get_int_as_rejects_out_of_range() {
        let mut config = Config::default();
        config.set("width", 1920_i64);
        config.set("negative", -3_i64);
        config.set("huge", i64::MAX);

        assert_eq!(config.get_int_as::<u32>("width"), Some(1920));
        assert_eq!(config.get_int_as::<u32>("negative"), None);
        assert_eq!(config.get_int_as::<u16>("huge"), None);
        assert_eq!(config.get_int_as::<u32>("missing"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ConfigValue::Int(144).to_string(), "144");
        assert_eq!(ConfigValue::from("Visionary").to_string(), "\"Visionary\"");
        assert_eq!(ConfigValue::Int(-1).to_string(), "-1");
    }
}
