use std::{fmt::Display, str::FromStr};

use serde::{de, Deserialize, Deserializer};

use crate::config::Config;

use super::source::QueryParams;

pub fn api_host(config: &Config, use_cdn: bool) -> String {
    let api = if use_cdn { "apicdn" } else { "api" };
    format!("https://{}.{}.sanity.io", config.sanity_project_id, api)
}

pub fn query_url(config: &Config) -> String {
    format!(
        "{}/v{}/data/query/{}",
        api_host(config, config.sanity_use_cdn),
        config.sanity_api_version,
        config.sanity_dataset
    )
}

/// Mutations never go through the CDN.
pub fn mutate_url(config: &Config) -> String {
    format!(
        "{}/v{}/data/mutate/{}",
        api_host(config, false),
        config.sanity_api_version,
        config.sanity_dataset
    )
}

/// Query string pairs for the GROQ endpoint: the query itself plus one
/// `$name` entry per parameter, JSON encoded.
pub fn query_pairs(groq: &str, params: &QueryParams) -> Vec<(String, String)> {
    let mut pairs = vec![("query".to_string(), groq.to_string())];
    for (name, value) in params {
        pairs.push((format!("${}", name), value.to_string()));
    }
    pairs
}

/// GROQ projections answer `null` for absent fields, which serde's
/// `default` alone does not cover.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Query strings send unset form fields as `name=`; those mean "no value".
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::create_test_config;
    use serde_json::json;

    #[test]
    fn urls_follow_project_and_dataset() {
        let mut config = create_test_config();
        assert_eq!(
            query_url(&config),
            "https://test-project.api.sanity.io/v2025-05-24/data/query/test"
        );

        config.sanity_use_cdn = true;
        assert_eq!(
            query_url(&config),
            "https://test-project.apicdn.sanity.io/v2025-05-24/data/query/test"
        );
        assert_eq!(
            mutate_url(&config),
            "https://test-project.api.sanity.io/v2025-05-24/data/mutate/test"
        );
    }

    #[test]
    fn params_are_json_encoded() {
        let mut params = QueryParams::new();
        params.insert("city".to_string(), json!("Fez"));
        params.insert("guests".to_string(), json!(4));

        let pairs = query_pairs("*[_type == \"property\"]", &params);
        assert_eq!(pairs[0].0, "query");
        assert!(pairs.contains(&("$city".to_string(), "\"Fez\"".to_string())));
        assert!(pairs.contains(&("$guests".to_string(), "4".to_string())));
    }

    #[derive(Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "empty_as_none")]
        guests: Option<u32>,
    }

    #[test]
    fn empty_values_are_unset() {
        let form: Form = serde_json::from_value(json!({ "guests": "" })).unwrap();
        assert_eq!(form.guests, None);

        let form: Form = serde_json::from_value(json!({})).unwrap();
        assert_eq!(form.guests, None);

        let form: Form = serde_json::from_value(json!({ "guests": " 4 " })).unwrap();
        assert_eq!(form.guests, Some(4));

        assert!(serde_json::from_value::<Form>(json!({ "guests": "many" })).is_err());
    }
}
