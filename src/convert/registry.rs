//! Converter name resolution and instance caching.

use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use log::debug;

use crate::calendar::CalendarModel;
use crate::config::AliasTable;
use crate::convert::factory::ConvertibleEventFactory;
use crate::convert::resolve::canonical_name;
use crate::convert::{ConvertOptions, Converted, Converter, IcalConverter, JsonConverter};
use crate::error::{CalconvError, CalconvResult};

/// Constructor for a converter, invoked with the factory scoped to the
/// alias table of the calendar that triggered the build.
pub type ConverterCtor = fn(ConvertibleEventFactory) -> Arc<dyn Converter>;

/// Resolves converter names and owns the instance cache.
///
/// Registration happens at startup through `&mut self`; conversion is
/// `&self` and safe to share. Instances are built at most once per
/// canonical key and kept for the registry's lifetime.
pub struct ConverterRegistry {
    /// Built converter instances, keyed by canonical name. Append-only.
    converters: DashMap<String, Arc<dyn Converter>>,
    /// Type identifiers registered as conforming converter constructors.
    types: HashMap<String, ConverterCtor>,
    /// Short-name defaults, consulted only when no other strategy matches.
    defaults: HashMap<String, ConverterCtor>,
}

impl ConverterRegistry {
    pub fn new() -> Self {
        ConverterRegistry {
            converters: DashMap::new(),
            types: HashMap::new(),
            defaults: HashMap::new(),
        }
    }

    /// Registry preloaded with the built-in converters, under both their
    /// type identifiers and their conventional short names.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register("IcalConverter", |events| Arc::new(IcalConverter::new(events)));
        registry.register("JsonConverter", |events| Arc::new(JsonConverter::new(events)));

        registry.register_default("ical", |events| Arc::new(IcalConverter::new(events)));
        registry.register_default("json", |events| Arc::new(JsonConverter::new(events)));

        registry
    }

    /// Register a converter constructor under its type identifier.
    ///
    /// The constructor signature is the capability check: only conforming
    /// converters can be registered, so lookups never probe conformance at
    /// resolution time.
    pub fn register(&mut self, type_id: &str, ctor: ConverterCtor) {
        self.types.insert(canonical_name(type_id), ctor);
    }

    /// Register a last-resort constructor under a short name.
    pub fn register_default(&mut self, name: &str, ctor: ConverterCtor) {
        self.defaults.insert(canonical_name(name), ctor);
    }

    /// Convert the events of `calendar` with the converter named `name`.
    ///
    /// The name is resolved against the calendar's own registered-converters
    /// table; the resolved instance receives the calendar and options
    /// verbatim, and its output is returned untouched.
    pub fn convert(
        &self,
        calendar: &dyn CalendarModel,
        name: &str,
        options: &ConvertOptions,
    ) -> CalconvResult<Converted> {
        let aliases = calendar.config().registered_converters();
        let converter = self
            .resolve(name, aliases)
            .ok_or_else(|| CalconvError::ConverterNotFound(name.to_string()))?;

        converter.convert(calendar, options)
    }

    /// Resolve a raw name to a converter instance, building it on first use.
    ///
    /// Precedence, first match wins: cached instance, registered type
    /// identifier, alias table entry, default table. A failed resolution
    /// caches nothing.
    pub fn resolve(&self, name: &str, aliases: &AliasTable) -> Option<Arc<dyn Converter>> {
        let key = canonical_name(name);

        if let Some(converter) = self.converters.get(&key) {
            debug!("converter cache hit for '{name}'");
            return Some(Arc::clone(converter.value()));
        }

        // Raw name is itself a registered type identifier
        if let Some(&ctor) = self.types.get(&key) {
            return Some(self.build(key, ctor, aliases));
        }

        // Alias declared in the calendar's configuration; the type check
        // recurses on the entry's implementing type
        if let Some(decl) = aliases.get(name) {
            let target = canonical_name(&decl.converter);
            if let Some(&ctor) = self.types.get(&target) {
                return Some(self.build(target, ctor, aliases));
            }
        }

        if let Some(&ctor) = self.defaults.get(&key) {
            return Some(self.build(key, ctor, aliases));
        }

        None
    }

    /// Build-and-cache under a canonical key.
    ///
    /// At most one construction happens per key, even under concurrent
    /// callers for the same uncached name; callers for different keys are
    /// not serialized against each other.
    fn build(&self, key: String, ctor: ConverterCtor, aliases: &AliasTable) -> Arc<dyn Converter> {
        debug!("resolving converter instance for key '{key}'");

        let entry = self
            .converters
            .entry(key)
            .or_insert_with(|| ctor(ConvertibleEventFactory::new(aliases.clone())));

        Arc::clone(entry.value())
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Calendar;
    use crate::config::{CalendarConfig, ConverterDecl};
    use crate::event::Event;
    use chrono::{TimeZone, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct TagConverter(&'static str);

    impl Converter for TagConverter {
        fn convert(
            &self,
            _calendar: &dyn CalendarModel,
            _options: &ConvertOptions,
        ) -> CalconvResult<Converted> {
            Ok(self.0.to_string())
        }
    }

    fn alpha_ctor(_events: ConvertibleEventFactory) -> Arc<dyn Converter> {
        Arc::new(TagConverter("alpha"))
    }

    fn beta_ctor(_events: ConvertibleEventFactory) -> Arc<dyn Converter> {
        Arc::new(TagConverter("beta"))
    }

    fn aliases(entries: &[(&str, &str)]) -> AliasTable {
        entries
            .iter()
            .map(|(alias, target)| (alias.to_string(), ConverterDecl::new(target)))
            .collect()
    }

    fn calendar_with_aliases(entries: &[(&str, &str)]) -> Calendar {
        let config = CalendarConfig {
            converters: aliases(entries),
        };
        Calendar::with_config("test", config)
    }

    #[test]
    fn test_equivalent_spellings_resolve_to_identical_instance() {
        let mut registry = ConverterRegistry::new();
        registry.register("MyConv", alpha_ctor);

        let table = AliasTable::new();
        let first = registry.resolve("My-Conv", &table).unwrap();
        let second = registry.resolve("MYCONV", &table).unwrap();
        let third = registry.resolve("my_conv", &table).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&first, &third));
        assert_eq!(registry.converters.len(), 1);
    }

    // This counter belongs to this test alone; sharing it across tests
    // would race under the parallel test runner.
    static BUILD_CALLS: AtomicUsize = AtomicUsize::new(0);

    fn counting_ctor(_events: ConvertibleEventFactory) -> Arc<dyn Converter> {
        BUILD_CALLS.fetch_add(1, Ordering::SeqCst);
        Arc::new(TagConverter("counted"))
    }

    #[test]
    fn test_convert_twice_constructs_once() {
        let mut registry = ConverterRegistry::new();
        registry.register("CountedConverter", counting_ctor);

        let calendar = calendar_with_aliases(&[("counted", "CountedConverter")]);
        let options = ConvertOptions::new();

        registry.convert(&calendar, "counted", &options).unwrap();
        registry.convert(&calendar, "counted", &options).unwrap();

        assert_eq!(BUILD_CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_registered_type_wins_over_decoy_alias() {
        let mut registry = ConverterRegistry::new();
        registry.register("special", alpha_ctor);
        registry.register("BetaConverter", beta_ctor);

        // Decoy entry under the same raw name, pointing elsewhere
        let calendar = calendar_with_aliases(&[("special", "BetaConverter")]);

        let output = registry
            .convert(&calendar, "special", &ConvertOptions::new())
            .unwrap();
        assert_eq!(output, "alpha");
    }

    #[test]
    fn test_alias_entry_resolves_its_target_type() {
        let mut registry = ConverterRegistry::new();
        registry.register("BetaConverter", beta_ctor);

        let calendar = calendar_with_aliases(&[("feed", "BetaConverter")]);

        let output = registry
            .convert(&calendar, "feed", &ConvertOptions::new())
            .unwrap();
        assert_eq!(output, "beta");

        // The instance is cached under the target's canonical key, so the
        // type identifier now hits the cache directly
        let direct = registry.resolve("betaconverter", &AliasTable::new()).unwrap();
        let via_alias = registry
            .resolve("feed", calendar.config().registered_converters())
            .unwrap();
        assert!(Arc::ptr_eq(&direct, &via_alias));
    }

    #[test]
    fn test_alias_wins_over_default_table() {
        let mut registry = ConverterRegistry::new();
        registry.register("BetaConverter", beta_ctor);
        registry.register_default("feed", alpha_ctor);

        let calendar = calendar_with_aliases(&[("feed", "BetaConverter")]);

        let output = registry
            .convert(&calendar, "feed", &ConvertOptions::new())
            .unwrap();
        assert_eq!(output, "beta");
    }

    #[test]
    fn test_default_table_is_last_resort() {
        let mut registry = ConverterRegistry::new();
        registry.register_default("fallback", alpha_ctor);

        let calendar = calendar_with_aliases(&[]);

        let output = registry
            .convert(&calendar, "fallback", &ConvertOptions::new())
            .unwrap();
        assert_eq!(output, "alpha");
    }

    #[test]
    fn test_alias_to_unregistered_type_does_not_match() {
        let registry = ConverterRegistry::new();
        let table = aliases(&[("feed", "NoSuchConverter")]);

        assert!(registry.resolve("feed", &table).is_none());
        assert!(registry.converters.is_empty());
    }

    #[test]
    fn test_unknown_name_fails_and_caches_nothing() {
        let registry = ConverterRegistry::new();
        let calendar = calendar_with_aliases(&[]);

        let err = registry
            .convert(&calendar, "doesnotexist", &ConvertOptions::new())
            .unwrap_err();

        assert!(matches!(err, CalconvError::ConverterNotFound(name) if name == "doesnotexist"));
        assert!(registry.converters.is_empty());
    }

    #[test]
    fn test_cache_hit_short_circuits_alias_lookup() {
        let mut registry = ConverterRegistry::new();
        registry.register("MyConv", alpha_ctor);

        let table = aliases(&[("myconv", "BetaConverter")]);
        let built = registry.resolve("MyConv", &AliasTable::new()).unwrap();

        // Same canonical key now resolves from the cache before the alias
        // table (whose target was never registered) is consulted
        let cached = registry.resolve("my-conv", &table).unwrap();
        assert!(Arc::ptr_eq(&built, &cached));
    }

    #[test]
    fn test_with_defaults_converts_through_builtin_converters() {
        let registry = ConverterRegistry::with_defaults();

        let mut calendar = Calendar::new("team");
        calendar.add_event(Event::new(
            "Standup",
            Utc.with_ymd_and_hms(2025, 3, 20, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 20, 9, 15, 0).unwrap(),
        ));

        let ics = registry
            .convert(&calendar, "ical", &ConvertOptions::new())
            .unwrap();
        assert!(ics.contains("BEGIN:VCALENDAR"));
        assert!(ics.contains("SUMMARY:Standup"));

        let json = registry
            .convert(&calendar, "json", &ConvertOptions::new())
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["calendar"], "team");
        assert_eq!(parsed["events"][0]["summary"], "Standup");
    }
}
