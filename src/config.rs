use thiserror::Error;

pub const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";
pub const TO_EMAIL_VAR: &str = "EMAILJS_TO_EMAIL";
pub const AUTOREPLY_TEMPLATE_VAR: &str = "EMAILJS_AUTOREPLY_TEMPLATE_ID";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Incomplete EmailJS configuration, missing: {}", .0.join(", "))]
    Incomplete(Vec<&'static str>),
}

/// EmailJS credentials. The browser bundle has no runtime environment, so
/// these are captured when the crate is compiled (see `build.rs`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Falls back to the address in the site content.
    pub to_email: Option<String>,
    pub autoreply_template_id: Option<String>,
}

impl GatewayConfig {
    pub fn from_build_env() -> Result<Option<Self>, ConfigError> {
        Self::resolve(|key| match key {
            SERVICE_ID_VAR => option_env!("EMAILJS_SERVICE_ID"),
            TEMPLATE_ID_VAR => option_env!("EMAILJS_TEMPLATE_ID"),
            PUBLIC_KEY_VAR => option_env!("EMAILJS_PUBLIC_KEY"),
            TO_EMAIL_VAR => option_env!("EMAILJS_TO_EMAIL"),
            AUTOREPLY_TEMPLATE_VAR => option_env!("EMAILJS_AUTOREPLY_TEMPLATE_ID"),
            _ => None,
        })
    }

    /// `Ok(None)` when no credential is set (demo mode). Blank values count as unset.
    pub fn resolve<'a, F>(lookup: F) -> Result<Option<Self>, ConfigError>
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        let service_id = get(SERVICE_ID_VAR);
        let template_id = get(TEMPLATE_ID_VAR);
        let public_key = get(PUBLIC_KEY_VAR);

        match (service_id, template_id, public_key) {
            (None, None, None) => Ok(None),
            (Some(service_id), Some(template_id), Some(public_key)) => Ok(Some(Self {
                service_id,
                template_id,
                public_key,
                to_email: get(TO_EMAIL_VAR),
                autoreply_template_id: get(AUTOREPLY_TEMPLATE_VAR),
            })),
            (service_id, template_id, public_key) => {
                let missing = [
                    (SERVICE_ID_VAR, service_id.is_none()),
                    (TEMPLATE_ID_VAR, template_id.is_none()),
                    (PUBLIC_KEY_VAR, public_key.is_none()),
                ]
                .into_iter()
                .filter_map(|(var, is_missing)| is_missing.then_some(var))
                .collect();
                Err(ConfigError::Incomplete(missing))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn resolve(vars: &[(&str, &'static str)]) -> Result<Option<GatewayConfig>, ConfigError> {
        let vars = vars.iter().cloned().collect::<HashMap<_, _>>();
        GatewayConfig::resolve(|key| vars.get(key).copied())
    }

    #[test]
    fn test_no_credentials_is_demo() {
        assert_eq!(resolve(&[]), Ok(None));
        assert_eq!(resolve(&[(SERVICE_ID_VAR, "  ")]), Ok(None));
    }

    #[test]
    fn test_full_credentials() {
        let config = resolve(&[
            (SERVICE_ID_VAR, "service_abc"),
            (TEMPLATE_ID_VAR, "template_abc"),
            (PUBLIC_KEY_VAR, "key_abc"),
            (AUTOREPLY_TEMPLATE_VAR, "template_reply"),
        ])
        .expect("config should resolve")
        .expect("config should be present");
        assert_eq!(config.service_id, "service_abc");
        assert_eq!(config.to_email, None);
        assert_eq!(
            config.autoreply_template_id.as_deref(),
            Some("template_reply")
        );
    }

    #[test]
    fn test_partial_credentials_name_missing_vars() {
        let err = resolve(&[(SERVICE_ID_VAR, "service_abc")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Incomplete(vec![TEMPLATE_ID_VAR, PUBLIC_KEY_VAR])
        );
        assert!(err.to_string().contains("EMAILJS_PUBLIC_KEY"));
    }
}
