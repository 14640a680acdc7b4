use super::tts_backend::TtsBackend;
use crate::domain::tts::{LanguageCode, SynthesisError};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SYNTHESIZE_URL: &str = "https://texttospeech.googleapis.com/v1beta1/text:synthesize";

/// reqwest applies no overall timeout by default; make one explicit so a
/// stuck synthesis call cannot hang the whole batch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Audio settings tuned for small bluetooth-speaker class devices.
const EFFECTS_PROFILE: &[&str] = &["small-bluetooth-speaker-class-device"];

/// Voice selection for one supported language, serialized as the `voice`
/// object of the synthesize request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSelection {
    pub language_code: &'static str,
    pub name: &'static str,
}

const VOICE_BY_LANG: &[(&str, VoiceSelection)] = &[
    ("de", VoiceSelection { language_code: "de-DE", name: "de-DE-Wavenet-C" }),
    ("en", VoiceSelection { language_code: "en-US", name: "en-US-Wavenet-D" }),
];

/// Resolve a language code against the static voice table.
/// An unmapped code is a lookup failure, never a silent default voice.
fn voice_for_language(language: &LanguageCode) -> Option<VoiceSelection> {
    VOICE_BY_LANG
        .iter()
        .find(|(code, _)| *code == language.as_str())
        .map(|(_, voice)| *voice)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig {
    audio_encoding: &'static str,
    speaking_rate: f32,
    pitch: f32,
    sample_rate_hertz: u32,
    effects_profile_id: &'static [&'static str],
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            audio_encoding: "MP3",
            speaking_rate: 1.0,
            pitch: 2.0,
            sample_rate_hertz: 44100,
            effects_profile_id: EFFECTS_PROFILE,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeRequest<'a> {
    audio_config: AudioConfig,
    voice: VoiceSelection,
    input: SynthesisInput<'a>,
}

#[derive(Debug, Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SynthesizeResponse {
    #[serde(rename = "audioContent")]
    audio_content: Option<String>,
}

/// Google Cloud Text-to-Speech implementation of the backend capability.
///
/// Holds one HTTP client for its whole lifetime so the connection is reused
/// across all sequential calls of a run.
pub struct GoogleTtsBackend {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl GoogleTtsBackend {
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_key: impl Into<String>) -> Result<Self, SynthesisError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            endpoint: SYNTHESIZE_URL.to_string(),
        })
    }

    /// Point the backend at a different synthesize endpoint. Used by tests
    /// against a local mock server.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl TtsBackend for GoogleTtsBackend {
    async fn synthesize(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<Vec<u8>, SynthesisError> {
        let voice = voice_for_language(language)
            .ok_or_else(|| SynthesisError::UnsupportedLanguage(language.clone()))?;

        let body = SynthesizeRequest {
            audio_config: AudioConfig::default(),
            voice,
            input: SynthesisInput { text },
        };

        tracing::debug!(
            language = %language,
            voice = voice.name,
            text_length = text.len(),
            "Calling Google text:synthesize"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Dump the outgoing request so the operator can see what was
            // rejected; the contract only carries the status code.
            tracing::error!(
                status = status.as_u16(),
                url = %self.endpoint,
                request_body = %serde_json::to_string(&body).unwrap_or_default(),
                "Google synthesize request failed"
            );
            return Err(SynthesisError::Status(status));
        }

        let payload: SynthesizeResponse = response.json().await.map_err(|e| {
            SynthesisError::MalformedResponse(format!("response body is not valid JSON: {e}"))
        })?;

        let audio_content = payload.audio_content.ok_or_else(|| {
            SynthesisError::MalformedResponse("audioContent not in the response json".to_string())
        })?;

        BASE64.decode(audio_content.as_bytes()).map_err(|e| {
            SynthesisError::MalformedResponse(format!("audioContent is not valid base64: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_should_resolve_the_configured_languages() {
        let de = voice_for_language(&LanguageCode::from("de")).unwrap();
        assert_eq!(de.language_code, "de-DE");
        assert_eq!(de.name, "de-DE-Wavenet-C");

        let en = voice_for_language(&LanguageCode::from("en")).unwrap();
        assert_eq!(en.language_code, "en-US");
        assert_eq!(en.name, "en-US-Wavenet-D");
    }

    #[test]
    fn it_should_not_resolve_an_unmapped_language() {
        assert_eq!(voice_for_language(&LanguageCode::from("fr")), None);
        assert_eq!(voice_for_language(&LanguageCode::from("")), None);
    }

    #[test]
    fn it_should_serialize_the_request_the_way_the_api_expects() {
        let body = SynthesizeRequest {
            audio_config: AudioConfig::default(),
            voice: voice_for_language(&LanguageCode::from("de")).unwrap(),
            input: SynthesisInput { text: "Hallo" },
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["audioConfig"]["audioEncoding"], "MP3");
        assert_eq!(json["audioConfig"]["speakingRate"], 1.0);
        assert_eq!(json["audioConfig"]["pitch"], 2.0);
        assert_eq!(json["audioConfig"]["sampleRateHertz"], 44100);
        assert_eq!(
            json["audioConfig"]["effectsProfileId"][0],
            "small-bluetooth-speaker-class-device"
        );
        assert_eq!(json["voice"]["languageCode"], "de-DE");
        assert_eq!(json["voice"]["name"], "de-DE-Wavenet-C");
        assert_eq!(json["input"]["text"], "Hallo");
    }
}
