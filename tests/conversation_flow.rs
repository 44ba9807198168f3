//! Integration tests for the full resume-building conversation.
//!
//! Drives the ProcessMessage handler end to end over the in-memory
//! stores, in two modes:
//! 1. Scripted generation - every polish and prompt call succeeds.
//! 2. Offline degradation - every generation call fails, so the whole
//!    conversation runs on raw input and the static fallback questions.

use std::sync::Arc;

use resumate::adapters::ai::MockTextGenerator;
use resumate::adapters::memory::{InMemoryChatStore, InMemoryResumeStore};
use resumate::application::{ManageResumeHandler, ProcessMessageHandler, ResumeStatusHandler};
use resumate::domain::engine::ConversationOrchestrator;
use resumate::domain::foundation::SectionKind;
use resumate::ports::{ChatRepository, ResumeRepository};

const USER_ANSWERS: [&str; 7] = [
    "jane doe",
    "senior software engineer",
    "I've spent eight years building distributed systems.",
    "Rust, Go, Kubernetes, PostgreSQL",
    "Staff engineer at Initech, leading the platform team.",
    "Built an open-source job scheduler used by 200 companies.",
    "BSc Computer Science, University of Washington",
];

struct Harness {
    resumes: Arc<InMemoryResumeStore>,
    chats: Arc<InMemoryChatStore>,
    handler: ProcessMessageHandler,
}

fn harness(mock: MockTextGenerator) -> Harness {
    let resumes = Arc::new(InMemoryResumeStore::new());
    let chats = Arc::new(InMemoryChatStore::new());
    let handler = ProcessMessageHandler::new(
        Arc::clone(&resumes) as Arc<dyn ResumeRepository>,
        Arc::clone(&chats) as Arc<dyn ChatRepository>,
        ConversationOrchestrator::new(Arc::new(mock)),
    );
    Harness {
        resumes,
        chats,
        handler,
    }
}

#[tokio::test]
async fn scripted_conversation_builds_a_complete_resume() {
    // Each answering turn makes two generator calls: polish, then the
    // next question. Script them in order.
    let mut mock = MockTextGenerator::new();
    for (i, _) in USER_ANSWERS.iter().enumerate() {
        mock = mock
            .with_response(format!("Polished section {i}"))
            .with_response(format!("Question {}", i + 1));
    }
    let hx = harness(mock);

    let manage = ManageResumeHandler::new(
        Arc::clone(&hx.resumes) as Arc<dyn ResumeRepository>,
        Arc::clone(&hx.chats) as Arc<dyn ChatRepository>,
    );
    let resume = manage.create("My Resume").await.unwrap();

    for (i, answer) in USER_ANSWERS.iter().enumerate() {
        let response = hx.handler.handle(resume.id, answer).await;

        assert!(response.success, "turn {i} failed: {:?}", response.error);
        assert_eq!(response.updated_section, Some(SectionKind::all()[i]));
        assert_eq!(
            response.generated_content.as_deref(),
            Some(format!("Polished section {i}").as_str())
        );
        assert!(!response.show_complete_resume);

        let step = response.current_step.unwrap();
        if i < 6 {
            assert_eq!(step.section, SectionKind::all()[i + 1].as_str());
            assert!(step.expecting_input);
        } else {
            assert_eq!(step.section, "complete");
            assert!(!step.expecting_input);
        }
    }

    // Affirmative reply on the finished resume triggers the reveal.
    let response = hx.handler.handle(resume.id, "yes").await;
    assert!(response.show_complete_resume);
    assert_eq!(response.updated_section, None);

    let data = response.complete_resume_data.unwrap();
    assert!(data.is_complete);
    assert_eq!(data.completion_percentage, 100);
    assert!(data.missing_sections.is_empty());

    let text = data.formatted_resume.unwrap();
    assert!(text.contains("Polished section 0"));
    assert!(text.contains("PROFESSIONAL SUMMARY"));
    assert!(text.contains("TECHNICAL SKILLS"));
    assert!(text.contains("PROFESSIONAL EXPERIENCE"));
    assert!(text.contains("KEY PROJECTS"));
    assert!(text.contains("EDUCATION"));
    assert!(text.contains("Generated on"));

    // 8 user turns, each with a bot reply.
    let chat = hx.chats.find_by_resume(resume.id).await.unwrap().unwrap();
    assert_eq!(chat.messages.len(), 16);
    assert_eq!(chat.turn_count(), 8);
}

#[tokio::test]
async fn offline_conversation_runs_entirely_on_fallback_text() {
    // Empty script: every generation call fails, so sections store the
    // raw input and the bot asks the static questions.
    let hx = harness(MockTextGenerator::new());

    let resume = resumate::domain::resume::Resume::new("Offline Resume");
    hx.resumes.create(&resume).await.unwrap();

    let expected_questions = [
        "What is your professional title or the position you're seeking?",
        "Can you tell me about your professional background in a few sentences?",
        "What are your top technical skills or areas of expertise?",
        "Can you describe your most recent work experience?",
        "Tell me about a significant project you've worked on.",
        "What is your educational background?",
        "Can you provide more information about this section?",
    ];

    for (i, answer) in USER_ANSWERS.iter().enumerate() {
        let response = hx.handler.handle(resume.id, answer).await;

        assert!(response.success);
        assert_eq!(response.generated_content, None);
        assert_eq!(response.updated_section, Some(SectionKind::all()[i]));
        assert_eq!(
            response.bot_message.unwrap().content,
            expected_questions[i]
        );
    }

    let stored = hx.resumes.find_by_id(resume.id).await.unwrap().unwrap();
    for (i, kind) in SectionKind::all().iter().enumerate() {
        let section = stored.sections.get(*kind).unwrap();
        assert_eq!(section.content, USER_ANSWERS[i]);
        assert!(!section.generated_by_assistant);
    }

    // The reveal path needs no generation at all.
    let response = hx.handler.handle(resume.id, "show me").await;
    assert!(response.show_complete_resume);
    let data = response.complete_resume_data.unwrap();
    assert!(data.is_complete);
    assert!(data
        .formatted_resume
        .unwrap()
        .contains("Rust, Go, Kubernetes, PostgreSQL"));
}

#[tokio::test]
async fn mid_conversation_status_reports_partial_completion() {
    let hx = harness(MockTextGenerator::new());
    let status = ResumeStatusHandler::new(Arc::clone(&hx.resumes) as Arc<dyn ResumeRepository>);

    let resume = resumate::domain::resume::Resume::new("Partial Resume");
    hx.resumes.create(&resume).await.unwrap();

    for answer in &USER_ANSWERS[..3] {
        hx.handler.handle(resume.id, answer).await;
    }

    let report = status.handle(resume.id).await;
    assert!(report.success);
    assert!(!report.is_complete);
    // 3/7 = 42.86%, rounded.
    assert_eq!(report.completion_percentage, 43);
    assert_eq!(report.missing_sections.len(), 4);
    assert_eq!(report.missing_sections[0], SectionKind::Skills);
    assert!(report.formatted_resume.is_none());
}

#[tokio::test]
async fn deleting_a_resume_removes_its_chat() {
    let hx = harness(MockTextGenerator::new());
    let manage = ManageResumeHandler::new(
        Arc::clone(&hx.resumes) as Arc<dyn ResumeRepository>,
        Arc::clone(&hx.chats) as Arc<dyn ChatRepository>,
    );

    let resume = manage.create("Doomed Resume").await.unwrap();
    hx.handler.handle(resume.id, "jane doe").await;
    assert!(hx.chats.find_by_resume(resume.id).await.unwrap().is_some());

    manage.delete(resume.id).await.unwrap();
    assert!(hx.resumes.find_by_id(resume.id).await.unwrap().is_none());
    assert!(hx.chats.find_by_resume(resume.id).await.unwrap().is_none());

    // A turn against the deleted resume is a structured failure.
    let response = hx.handler.handle(resume.id, "hello").await;
    assert!(!response.success);
    assert!(response.error.unwrap().contains("not found"));
}
