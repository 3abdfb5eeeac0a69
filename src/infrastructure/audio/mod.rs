mod audio_mime;
mod deepgram_speech_to_text;
mod openai_whisper_speech_to_text;

pub use audio_mime::audio_mime_type;
pub use deepgram_speech_to_text::DeepgramSpeechToText;
pub use openai_whisper_speech_to_text::OpenAiWhisperSpeechToText;
