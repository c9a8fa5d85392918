//! End-to-end tests for the translation pipeline against a mock
//! chat-completion endpoint.

use httpmock::Method::POST;
use httpmock::MockServer;
use pocket_translator::{AppContext, Config, Language, HISTORY_CAPACITY, LANGUAGES};

fn config_for(server: &MockServer) -> Config {
    let _ = env_logger::builder().is_test(true).try_init();
    Config {
        chat_endpoint: server.url("/v1/chat/completions"),
        transcription_endpoint: server.url("/v1/audio/transcriptions"),
        speech_endpoint: server.url("/v1/audio/speech"),
        safety_endpoint: server.url("/check"),
        api_key: "test-key".to_string(),
        ..Config::default()
    }
}

fn english() -> Language {
    LANGUAGES[1].clone()
}

fn chinese() -> Language {
    LANGUAGES[2].clone()
}

#[test]
fn hello_round_trip_lands_in_history() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .header("authorization", "Bearer test-key")
            .json_body_partial(
                r#"{"messages":[{"role":"user","content":"请将以下任意语言文本翻译成中文:\n\nHello\n\n只返回翻译结果："}]}"#,
            );
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"choices":[{"message":{"content":"你好"}}]}"#);
    });

    let mut app = AppContext::with_config(config_for(&server));
    app.translator.update_target_lang(chinese());
    app.translator.update_source_text("Hello");
    app.translator.translate().unwrap();

    mock.assert();
    assert_eq!(app.translator.translated_text(), "你好");
    assert!(!app.translator.is_loading());

    let history = app.translator.history().list();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].translated_text, "你好");
    assert_eq!(history[0].source_text, "Hello");
}

#[test]
fn repeated_translations_stack_newest_first_and_stay_bounded() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"choices":[{"message":{"content":"译文"}}]}"#);
    });

    let mut app = AppContext::with_config(config_for(&server));
    for n in 0..(HISTORY_CAPACITY + 3) {
        app.translator.update_source_text(format!("sentence {}", n));
        app.translator.translate().unwrap();
    }

    let history = app.translator.history().list();
    assert_eq!(history.len(), HISTORY_CAPACITY);
    assert_eq!(
        history[0].source_text,
        format!("sentence {}", HISTORY_CAPACITY + 2)
    );
    assert_eq!(history.last().unwrap().source_text, "sentence 3");
}

#[test]
fn swap_then_translate_uses_the_swapped_pair() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .json_body_partial(
                r#"{"messages":[{"role":"user","content":"请将以下中文文本翻译成英语:\n\n你好\n\n只返回翻译结果："}]}"#,
            );
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"choices":[{"message":{"content":"Hello"}}]}"#);
    });

    let mut app = AppContext::with_config(config_for(&server));
    app.translator.update_source_lang(english());
    app.translator.update_target_lang(chinese());
    app.translator.swap_languages(); // en/zh -> zh/en
    app.translator.update_source_text("你好");
    app.translator.translate().unwrap();

    mock.assert();
    assert_eq!(app.translator.translated_text(), "Hello");
    let record = &app.translator.history().list()[0];
    assert_eq!(record.source_lang.code, "zh");
    assert_eq!(record.target_lang.code, "en");
}

#[test]
fn remote_failure_is_rendered_not_raised() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(503).body("overloaded");
    });

    let mut app = AppContext::with_config(config_for(&server));
    app.translator.update_source_text("Hello");
    app.translator.translate().unwrap();

    assert!(app.translator.translated_text().starts_with("翻译出错: "));
    assert!(app.translator.history().is_empty());
    assert!(!app.translator.is_loading());
}

#[test]
fn safety_gate_blocks_before_the_chat_endpoint_is_touched() {
    let server = MockServer::start();
    let chat = server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"choices":[{"message":{"content":"你好"}}]}"#);
    });
    server.mock(|when, then| {
        when.method(POST).path("/check");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"data":"nope"}"#);
    });

    let mut config = config_for(&server);
    config.safety_check_enabled = true;
    let mut app = AppContext::with_config(config);

    app.translator.update_source_text("something dubious");
    app.translator.translate().unwrap();

    assert_eq!(chat.hits(), 0);
    assert!(app.translator.history().is_empty());
    assert!(!app.translator.translated_text().is_empty());
}

#[test]
fn safe_verdict_lets_the_translation_through() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/check");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"data":"safe"}"#);
    });
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"choices":[{"message":{"content":"你好"}}]}"#);
    });

    let mut config = config_for(&server);
    config.safety_check_enabled = true;
    let mut app = AppContext::with_config(config);

    app.translator.update_source_text("Hello");
    app.translator.translate().unwrap();

    assert_eq!(app.translator.translated_text(), "你好");
    assert_eq!(app.translator.history().len(), 1);
}

#[test]
fn speech_round_trip_through_the_same_context() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/audio/transcriptions");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"text":"Hello"}"#);
    });
    let audio = vec![1u8, 2, 3, 4];
    server.mock(|when, then| {
        when.method(POST).path("/v1/audio/speech");
        then.status(200)
            .header("content-type", "audio/mpeg")
            .body(audio.clone());
    });

    let app = AppContext::with_config(config_for(&server));
    assert_eq!(app.speech.transcribe(b"clip-bytes").unwrap(), "Hello");
    assert_eq!(app.speech.synthesize("Hello").unwrap(), audio);
}
