//! Query submission: pending → resolved

use async_trait::async_trait;
use intelterm_core::constants::{CONNECTION_FAILURE, PROCESSING_TEXT};
use intelterm_core::{
    AppConfig, MessageKind, QueryError, QueryReply, QueryTransport, Submission, TerminalSession,
    dispatch,
};
use std::sync::Mutex;
use std::time::Instant;

struct StubTransport {
    answer: Result<&'static str, u16>,
    seen: Mutex<Vec<String>>,
}

impl StubTransport {
    fn answering(answer: &'static str) -> Self {
        Self {
            answer: Ok(answer),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn failing(status: u16) -> Self {
        Self {
            answer: Err(status),
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl QueryTransport for StubTransport {
    async fn ask(&self, query: &str) -> Result<String, QueryError> {
        self.seen.lock().unwrap().push(query.to_string());
        match self.answer {
            Ok(answer) => Ok(answer.to_string()),
            Err(code) => Err(QueryError::status(
                reqwest::StatusCode::from_u16(code).unwrap(),
            )),
        }
    }
}

fn session() -> TerminalSession {
    TerminalSession::new(&AppConfig::default())
}

fn kinds(session: &TerminalSession) -> Vec<MessageKind> {
    session
        .conversation
        .messages()
        .iter()
        .map(|m| m.kind)
        .collect()
}

#[test]
fn test_empty_and_whitespace_inputs_are_no_ops() {
    for input in ["", " ", "\t", "   \t  "] {
        let mut session = session();
        session.conversation.input.set(input);
        assert_eq!(session.submit(), Submission::Empty);
        assert!(session.conversation.messages().is_empty());
        assert!(session.conversation.history.is_empty());
        assert!(!session.conversation.in_flight());
    }
}

#[test]
fn test_submit_adds_user_message_and_placeholder() {
    let mut session = session();
    session.conversation.input.set("locate the disk");

    let Submission::Accepted(request) = session.submit() else {
        panic!("query should be accepted");
    };
    assert_eq!(request.query, "locate the disk");
    assert_eq!(kinds(&session), vec![MessageKind::User, MessageKind::Processing]);
    assert_eq!(session.conversation.messages()[1].content, PROCESSING_TEXT);

    let pending = session.conversation.pending().unwrap();
    assert_eq!(pending.request_id, request.request_id);
    assert_eq!(pending.placeholder, session.conversation.messages()[1].id);
    assert!(session.conversation.in_flight());
    assert!(session.conversation.input.is_empty());
}

#[tokio::test]
async fn test_successful_reply_replaces_placeholder_with_response() {
    let transport = StubTransport::answering("The NOC list is in Langley.");
    let mut session = session();
    session.conversation.input.set("where is the NOC list?");

    let Submission::Accepted(request) = session.submit() else {
        panic!("query should be accepted");
    };
    let reply = dispatch(&transport, request).await;
    session.resolve(reply, Instant::now());

    assert_eq!(kinds(&session), vec![MessageKind::User, MessageKind::Response]);
    assert_eq!(
        session.conversation.messages()[1].content,
        "The NOC list is in Langley."
    );
    assert!(!session.conversation.in_flight());
    assert_eq!(
        transport.seen.lock().unwrap().as_slice(),
        ["where is the NOC list?"]
    );
}

#[tokio::test]
async fn test_failed_reply_replaces_placeholder_with_error() {
    let transport = StubTransport::failing(503);
    let mut session = session();
    session.conversation.input.set("status");

    let Submission::Accepted(request) = session.submit() else {
        panic!("query should be accepted");
    };
    let reply = dispatch(&transport, request).await;
    session.resolve(reply, Instant::now());

    assert_eq!(kinds(&session), vec![MessageKind::User, MessageKind::Error]);
    assert!(
        session.conversation.messages()[1]
            .content
            .ends_with("HTTP error! status: 503")
    );
    // Errors are shown at once, not typed out
    assert!(session.reveals.is_idle());
}

#[test]
fn test_second_submission_is_blocked_while_in_flight() {
    let mut session = session();
    session.conversation.input.set("first");
    assert!(matches!(session.submit(), Submission::Accepted(_)));

    session.conversation.input.set("second");
    assert_eq!(session.submit(), Submission::Busy);
    assert_eq!(session.conversation.messages().len(), 2);
    assert_eq!(session.conversation.history.entries(), ["first"]);
}

#[test]
fn test_reply_for_other_request_is_ignored() {
    let mut session = session();
    session.conversation.input.set("q");
    session.submit();

    let stray = QueryReply::answered(uuid::Uuid::new_v4(), "stray");
    assert!(session.resolve(stray, Instant::now()).is_none());
    assert_eq!(kinds(&session), vec![MessageKind::User, MessageKind::Processing]);
}

#[test]
fn test_message_ids_are_unique_and_ordered() {
    let mut session = session();
    let now = Instant::now();
    for i in 0..5 {
        session.conversation.input.set(format!("query {i}"));
        let Submission::Accepted(request) = session.submit() else {
            panic!("query should be accepted");
        };
        let reply = QueryReply::failed(
            request.request_id,
            QueryError::invalid_response("stub", "missing answer"),
        );
        session.resolve(reply, now);
    }

    let ids: Vec<_> = session.conversation.messages().iter().map(|m| m.id).collect();
    assert_eq!(ids.len(), 10);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    assert!(
        session
            .conversation
            .messages()
            .iter()
            .filter(|m| m.kind == MessageKind::Error)
            .all(|m| m.content == CONNECTION_FAILURE)
    );
}
