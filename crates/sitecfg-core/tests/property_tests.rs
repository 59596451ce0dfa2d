//! Last-write-wins properties of the resolver

use std::collections::BTreeMap;

use proptest::prelude::*;
use serde_json::Value;
use sitecfg_core::{Layer, LayerOrigin, Settings, resolve};

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z/{}:%]{0,12}".prop_map(Value::from),
        prop::collection::vec("[a-z.]{1,8}", 0..4).prop_map(Value::from),
    ]
}

fn settings_strategy() -> impl Strategy<Value = Settings> {
    prop::collection::btree_map("[A-E]", value_strategy(), 0..5)
}

fn layers_strategy() -> impl Strategy<Value = Vec<Layer>> {
    prop::collection::vec(settings_strategy(), 0..5).prop_map(|all| {
        all.into_iter()
            .enumerate()
            .map(|(i, settings)| Layer::new(format!("layer{i}"), LayerOrigin::Builtin, settings))
            .collect()
    })
}

proptest! {
    #[test]
    fn every_name_resolves_to_its_last_definition(layers in layers_strategy()) {
        let resolved = resolve(&layers);

        let mut expected: BTreeMap<String, Value> = BTreeMap::new();
        for layer in &layers {
            for (name, value) in layer.settings() {
                expected.insert(name.clone(), value.clone());
            }
        }

        prop_assert_eq!(resolved.settings(), &expected);
    }

    #[test]
    fn winner_is_the_last_layer_defining_a_name(layers in layers_strategy()) {
        let resolved = resolve(&layers);

        for name in resolved.settings().keys() {
            let last = layers
                .iter()
                .rev()
                .find(|layer| layer.get(name).is_some())
                .map(Layer::label);
            prop_assert_eq!(resolved.winner(name).map(str::to_string), last);
        }
    }

    #[test]
    fn sequences_are_never_merged(a in prop::collection::vec("[a-z]{1,5}", 0..5),
                                  b in prop::collection::vec("[a-z]{1,5}", 0..5)) {
        let mut first = Settings::new();
        first.insert("PLUGINS".into(), Value::from(a));
        let mut second = Settings::new();
        second.insert("PLUGINS".into(), Value::from(b.clone()));

        let resolved = resolve(&[
            Layer::new("first", LayerOrigin::Builtin, first),
            Layer::new("second", LayerOrigin::Builtin, second),
        ]);

        prop_assert_eq!(resolved.get("PLUGINS"), Some(&Value::from(b)));
    }
}
