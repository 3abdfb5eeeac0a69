mod http_audio_stager;

pub use http_audio_stager::HttpAudioStager;
