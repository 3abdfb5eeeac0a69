use audio_digest::application::ports::StageErrorKind;
use audio_digest::infrastructure::stages::StageProviderFactory;
use audio_digest::presentation::config::ProviderSettings;

fn configured() -> ProviderSettings {
    let mut settings = ProviderSettings::default();
    settings.deepgram.api_key = Some("dg-key".to_string());
    settings.openai.api_key = Some("sk-key".to_string());
    settings
}

#[test]
fn given_both_api_keys_when_building_providers_then_succeeds() {
    assert!(StageProviderFactory::create(&configured()).is_ok());
}

#[test]
fn given_missing_deepgram_key_when_building_providers_then_configuration_error_names_setting() {
    let mut settings = configured();
    settings.deepgram.api_key = None;

    let Err(err) = StageProviderFactory::create(&settings) else {
        panic!("expected missing deepgram key to be rejected");
    };

    assert_eq!(err.kind, StageErrorKind::Configuration);
    assert!(err.to_string().contains("providers.deepgram.api_key"));
}

#[test]
fn given_blank_openai_key_when_building_providers_then_configuration_error_names_setting() {
    let mut settings = configured();
    settings.openai.api_key = Some("   ".to_string());

    let Err(err) = StageProviderFactory::create(&settings) else {
        panic!("expected blank openai key to be rejected");
    };

    assert_eq!(err.kind, StageErrorKind::Configuration);
    assert!(err.to_string().contains("providers.openai.api_key"));
}
