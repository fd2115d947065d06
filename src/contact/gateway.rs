use std::{
    sync::{Arc, LazyLock, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use futures::future::LocalBoxFuture;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use super::validation::ContactFormInput;
use crate::config::{ConfigError, GatewayConfig};
use crate::content::PORTFOLIO;

pub const DEMO_LATENCY: Duration = Duration::from_secs(2);
pub const DEMO_SUCCESS_RATE: f64 = 0.9;

const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub const SENT_MESSAGE: &str =
    "Your message has been sent successfully! I'll get back to you within 24 hours.";
pub const SEND_FAILED_MESSAGE: &str =
    "Failed to send message. Please try again or contact me directly via email.";
pub const DEMO_SENT_MESSAGE: &str = "✨ Demo Mode: Your message has been simulated successfully! In production, this would send a real email. I'll get back to you within 24 hours.";
pub const DEMO_FAILED_MESSAGE: &str = "⚠️ Demo Mode: Simulated failure. In production, this would be a real error. Please try again or contact me directly.";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Email pattern should compile")
});

pub fn validate_email_format(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// Waits out a duration on whatever timer the platform has.
pub type Delay = Arc<dyn Fn(Duration) -> LocalBoxFuture<'static, ()> + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailDispatchResult {
    pub success: bool,
    pub message: String,
    pub payload: Value,
}

impl EmailDispatchResult {
    pub fn sent(message: impl Into<String>, payload: Value) -> Self {
        Self {
            success: true,
            message: message.into(),
            payload,
        }
    }

    pub fn failed(message: impl Into<String>, payload: Value) -> Self {
        Self {
            success: false,
            message: message.into(),
            payload,
        }
    }
}

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Email request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Email provider rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("No email gateway is available")]
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayMode {
    Demo,
    EmailJs,
}

#[async_trait(?Send)]
pub trait EmailGateway: Send + Sync {
    /// One delivery attempt. Retrying is up to the visitor.
    async fn send(&self, input: &ContactFormInput) -> Result<EmailDispatchResult, DispatchError>;

    /// Thanks the sender after a delivered message. Runs apart from `send`,
    /// so a slow or failed acknowledgement never holds up the form.
    async fn acknowledge(&self, _input: &ContactFormInput) -> Result<(), DispatchError> {
        Ok(())
    }

    fn mode(&self) -> GatewayMode;
}

/// Picks the gateway for this build. Called once at startup.
pub fn init(delay: Delay) -> Arc<dyn EmailGateway> {
    init_with(GatewayConfig::from_build_env(), delay)
}

pub fn init_with(
    config: Result<Option<GatewayConfig>, ConfigError>,
    delay: Delay,
) -> Arc<dyn EmailGateway> {
    match config {
        Ok(Some(config)) => {
            log::info!("Contact form using EmailJS service {}", config.service_id);
            Arc::new(EmailJsGateway::new(config))
        }
        Ok(None) => {
            log::info!("EmailJS not configured, contact form running in demo mode");
            Arc::new(DemoGateway::new(seed(), delay))
        }
        Err(e) => {
            log::warn!("{e}, contact form running in demo mode");
            Arc::new(DemoGateway::new(seed(), delay))
        }
    }
}

fn seed() -> u64 {
    chrono::Utc::now().timestamp_micros() as u64
}

/// Simulates delivery: waits, then succeeds or fails at random.
pub struct DemoGateway {
    rng: Mutex<SmallRng>,
    success_rate: f64,
    latency: Duration,
    delay: Delay,
}

impl DemoGateway {
    pub fn new(seed: u64, delay: Delay) -> Self {
        Self {
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
            success_rate: DEMO_SUCCESS_RATE,
            latency: DEMO_LATENCY,
            delay,
        }
    }

    /// Probability in `[0, 1]`; out of range values are clamped.
    pub fn with_success_rate(mut self, rate: f64) -> Self {
        self.success_rate = if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) };
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn roll(&self) -> bool {
        self.rng
            .lock()
            .expect("should be able to lock demo rng")
            .gen_bool(self.success_rate)
    }
}

#[async_trait(?Send)]
impl EmailGateway for DemoGateway {
    async fn send(&self, input: &ContactFormInput) -> Result<EmailDispatchResult, DispatchError> {
        log::info!("📧 Demo Mode - email would be sent");
        log::info!("From: {} <{}>", input.name, input.email);
        log::info!("Subject: {}", input.subject);
        log::debug!("Message: {}", input.message);

        (self.delay)(self.latency).await;

        if self.roll() {
            Ok(EmailDispatchResult::sent(
                DEMO_SENT_MESSAGE,
                json!({ "demo": true }),
            ))
        } else {
            Ok(EmailDispatchResult::failed(
                DEMO_FAILED_MESSAGE,
                json!({ "demo": true }),
            ))
        }
    }

    fn mode(&self) -> GatewayMode {
        GatewayMode::Demo
    }
}

#[derive(Serialize)]
struct SendRequest<'a, P> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: P,
}

#[derive(Serialize)]
struct MessageParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    subject: &'a str,
    message: &'a str,
    to_email: &'a str,
    reply_to: &'a str,
}

#[derive(Serialize)]
struct AutoReplyParams<'a> {
    to_email: &'a str,
    to_name: &'a str,
    from_name: &'a str,
    message: String,
}

/// Relays messages through the EmailJS REST API.
pub struct EmailJsGateway {
    client: reqwest::Client,
    config: GatewayConfig,
    endpoint: String,
    owner_name: String,
    owner_email: String,
}

impl EmailJsGateway {
    pub fn new(config: GatewayConfig) -> Self {
        let personal = &PORTFOLIO.personal;
        Self {
            client: reqwest::Client::new(),
            owner_email: config
                .to_email
                .clone()
                .unwrap_or_else(|| personal.email.clone()),
            owner_name: personal.name.clone(),
            config,
            endpoint: EMAILJS_SEND_URL.to_string(),
        }
    }

    fn request<'a, P: Serialize>(&'a self, template_id: &'a str, params: P) -> SendRequest<'a, P> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id,
            user_id: &self.config.public_key,
            template_params: params,
        }
    }

    fn message_params<'a>(&'a self, input: &'a ContactFormInput) -> MessageParams<'a> {
        MessageParams {
            from_name: &input.name,
            from_email: &input.email,
            subject: &input.subject,
            message: &input.message,
            to_email: &self.owner_email,
            reply_to: &input.email,
        }
    }

    fn auto_reply_params<'a>(&'a self, input: &'a ContactFormInput) -> AutoReplyParams<'a> {
        let message = format!(
            "Hi {},\n\nThank you for reaching out to me! I have received your message and will get back to you within 24 hours.\n\nBest regards,\n{}",
            input.name, self.owner_name
        );
        AutoReplyParams {
            to_email: &input.email,
            to_name: &input.name,
            from_name: &self.owner_name,
            message,
        }
    }

    async fn post<P: Serialize>(&self, template_id: &str, params: P) -> Result<String, DispatchError> {
        let res = self
            .client
            .post(&self.endpoint)
            .json(&self.request(template_id, params))
            .send()
            .await?;
        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(DispatchError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

#[async_trait(?Send)]
impl EmailGateway for EmailJsGateway {
    async fn send(&self, input: &ContactFormInput) -> Result<EmailDispatchResult, DispatchError> {
        match self
            .post(&self.config.template_id, self.message_params(input))
            .await
        {
            Ok(body) => Ok(EmailDispatchResult::sent(
                SENT_MESSAGE,
                json!({ "response": body }),
            )),
            Err(e) => {
                log::error!("Email sending failed: {e}");
                Ok(EmailDispatchResult::failed(
                    SEND_FAILED_MESSAGE,
                    json!({ "error": e.to_string() }),
                ))
            }
        }
    }

    /// Sends the auto-reply template, if one is configured.
    async fn acknowledge(&self, input: &ContactFormInput) -> Result<(), DispatchError> {
        let Some(template_id) = self.config.autoreply_template_id.as_deref() else {
            return Ok(());
        };
        self.post(template_id, self.auto_reply_params(input)).await?;
        Ok(())
    }

    fn mode(&self) -> GatewayMode {
        GatewayMode::EmailJs
    }
}

#[cfg(test)]
mod tests {
    use futures::{executor::block_on, future::FutureExt};
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn no_delay() -> Delay {
        Arc::new(|_: Duration| async {}.boxed_local())
    }

    fn input() -> ContactFormInput {
        ContactFormInput {
            name: "Al".to_string(),
            email: "a@b.com".to_string(),
            subject: "Hello there".to_string(),
            message: "x".repeat(25),
        }
    }

    fn config() -> GatewayConfig {
        GatewayConfig {
            service_id: "service_abc".to_string(),
            template_id: "template_abc".to_string(),
            public_key: "key_abc".to_string(),
            to_email: None,
            autoreply_template_id: None,
        }
    }

    #[test]
    fn test_email_format() {
        assert!(validate_email_format("a@b.com"));
        assert!(validate_email_format("first.last+tag@mail.example.org"));
        assert!(!validate_email_format("bad"));
        assert!(!validate_email_format("a@b"));
        assert!(!validate_email_format("a b@c.com"));
        assert!(!validate_email_format("a@@b.com"));
        assert!(!validate_email_format("@b.com"));
    }

    #[test]
    fn test_demo_always_succeeds() {
        let gateway = DemoGateway::new(7, no_delay()).with_success_rate(1.0);
        for _ in 0..20 {
            let res = block_on(gateway.send(&input())).expect("demo never errors");
            assert!(res.success);
            assert_eq!(res.message, DEMO_SENT_MESSAGE);
            assert_eq!(res.payload, json!({ "demo": true }));
        }
    }

    #[test]
    fn test_demo_always_fails() {
        let gateway = DemoGateway::new(7, no_delay()).with_success_rate(0.0);
        let res = block_on(gateway.send(&input())).expect("demo never errors");
        assert!(!res.success);
        assert_eq!(res.message, DEMO_FAILED_MESSAGE);
    }

    #[test]
    fn test_demo_rate_is_clamped() {
        let gateway = DemoGateway::new(7, no_delay()).with_success_rate(3.0);
        assert!(block_on(gateway.send(&input())).unwrap().success);
        let gateway = DemoGateway::new(7, no_delay()).with_success_rate(f64::NAN);
        assert!(!block_on(gateway.send(&input())).unwrap().success);
    }

    #[test]
    fn test_demo_mostly_succeeds() {
        let gateway = DemoGateway::new(42, no_delay());
        let successes = (0..1000)
            .filter(|_| block_on(gateway.send(&input())).unwrap().success)
            .count();
        assert!((820..=980).contains(&successes), "got {successes}");
    }

    #[test]
    fn test_demo_waits_for_latency() {
        let waited = Arc::new(AtomicUsize::new(0));
        let delay: Delay = {
            let waited = waited.clone();
            Arc::new(move |d: Duration| {
                waited.fetch_add(d.as_millis() as usize, Ordering::SeqCst);
                async {}.boxed_local()
            })
        };
        let gateway = DemoGateway::new(1, delay).with_latency(Duration::from_millis(250));
        block_on(gateway.send(&input())).unwrap();
        assert_eq!(waited.load(Ordering::SeqCst), 250);
    }

    #[test]
    fn test_init_modes() {
        assert_eq!(init_with(Ok(None), no_delay()).mode(), GatewayMode::Demo);
        assert_eq!(
            init_with(Err(ConfigError::Incomplete(vec!["EMAILJS_PUBLIC_KEY"])), no_delay()).mode(),
            GatewayMode::Demo
        );
        assert_eq!(
            init_with(Ok(Some(config())), no_delay()).mode(),
            GatewayMode::EmailJs
        );
    }

    #[test]
    fn test_emailjs_request_body() {
        let gateway = EmailJsGateway::new(config());
        let input = input();
        let body = serde_json::to_value(
            gateway.request(&gateway.config.template_id, gateway.message_params(&input)),
        )
        .unwrap();
        assert_eq!(
            body,
            json!({
                "service_id": "service_abc",
                "template_id": "template_abc",
                "user_id": "key_abc",
                "template_params": {
                    "from_name": "Al",
                    "from_email": "a@b.com",
                    "subject": "Hello there",
                    "message": "x".repeat(25),
                    "to_email": PORTFOLIO.personal.email,
                    "reply_to": "a@b.com",
                }
            })
        );
    }

    #[test]
    fn test_emailjs_recipient_override_and_auto_reply() {
        let gateway = EmailJsGateway::new(GatewayConfig {
            to_email: Some("inbox@example.com".to_string()),
            ..config()
        });
        let input = input();
        assert_eq!(gateway.message_params(&input).to_email, "inbox@example.com");

        let reply = gateway.auto_reply_params(&input);
        assert_eq!(reply.to_email, "a@b.com");
        assert!(reply.message.starts_with("Hi Al,"));
        assert!(reply.message.ends_with(&PORTFOLIO.personal.name));
    }

    #[test]
    fn test_acknowledge_without_template_sends_nothing() {
        // no auto-reply template, so no request is made
        let gateway = EmailJsGateway::new(config());
        assert!(block_on(gateway.acknowledge(&input())).is_ok());

        let demo = DemoGateway::new(7, no_delay());
        assert!(block_on(demo.acknowledge(&input())).is_ok());
    }
}
