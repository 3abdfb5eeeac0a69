mod http_audio_stager_test;
