use feedline_core::{
    CommentEntry, CommentError, DraftPolicy, FeedConfig, PostController, DEFAULT_SEED_COMMENT,
};

fn controller() -> PostController {
    PostController::new(1, &FeedConfig::default())
}

#[test]
fn new_thread_starts_with_seed_comment_and_empty_draft() {
    let thread = controller();

    assert_eq!(thread.comment_count(), 1);
    assert_eq!(thread.comments()[0].text(), "Post muito bacana, hein?!");
    assert_eq!(thread.comments()[0].like_count(), 0);
    assert_eq!(thread.draft(), "");
    assert_eq!(thread.validation_message(), None);
}

#[test]
fn submit_appends_comment_and_resets_draft() {
    let mut thread = controller();

    for text in ["oi", "segundo comentário", "  com espaços  "] {
        let before = thread.comment_count();
        thread.update_draft(text);
        let id = thread.submit_comment().unwrap();

        assert_eq!(thread.comment_count(), before + 1);
        let last = thread.comments().last().unwrap();
        assert_eq!(last.id(), id);
        assert_eq!(last.text(), text);
        assert_eq!(last.like_count(), 0);
        assert_eq!(thread.draft(), "");
    }
}

#[test]
fn blank_drafts_are_rejected_without_touching_the_thread() {
    let mut thread = controller();

    for text in ["", " ", "\n\t  "] {
        thread.update_draft(text);
        assert_eq!(thread.submit_comment(), Err(CommentError::EmptyInput));
        assert_eq!(thread.comment_count(), 1);
        assert_eq!(thread.comments()[0].text(), DEFAULT_SEED_COMMENT);
    }
}

#[test]
fn reject_empty_policy_accepts_whitespace_comments() {
    let config = FeedConfig {
        draft_policy: DraftPolicy::RejectEmpty,
        ..FeedConfig::default()
    };
    let mut thread = PostController::new(1, &config);

    thread.update_draft("   ");
    assert!(thread.is_submit_enabled());
    thread.submit_comment().unwrap();
    assert_eq!(thread.comments().last().unwrap().text(), "   ");

    thread.update_draft("");
    assert_eq!(thread.submit_comment(), Err(CommentError::EmptyInput));
}

#[test]
fn submit_enabled_tracks_draft() {
    let mut thread = controller();

    thread.update_draft("");
    assert!(!thread.is_submit_enabled());
    thread.update_draft("oi");
    assert!(thread.is_submit_enabled());
}

#[test]
fn update_draft_clears_validation_message() {
    let mut thread = controller();

    thread.submit_comment().unwrap_err();
    assert_eq!(thread.validation_message(), Some("Esse campo é obrigatório!"));

    thread.update_draft("o");
    assert_eq!(thread.validation_message(), None);

    thread.mark_draft_invalid();
    assert!(thread.validation_message().is_some());
    thread.update_draft("");
    assert_eq!(thread.validation_message(), None);
}

#[test]
fn seed_comment_liked_three_times_counts_three() {
    let mut thread = controller();
    let seed_id = thread.comments()[0].id();

    for _ in 0..3 {
        thread.like_comment(seed_id);
    }
    assert_eq!(thread.comment(seed_id).unwrap().like_count(), 3);
}

#[test]
fn like_count_equals_number_of_likes() {
    let mut entry = CommentEntry::new("curtido");
    for expected in 1..=5 {
        assert_eq!(entry.like(), expected);
    }
    assert_eq!(entry.like_count(), 5);
}

#[test]
fn likes_on_interleaved_comments_stay_independent() {
    let mut thread = controller();
    thread.update_draft("outro");
    let other = thread.submit_comment().unwrap();
    let seed = thread.comments()[0].id();

    for _ in 0..4 {
        thread.like_comment(seed);
        thread.like_comment(other);
    }
    thread.like_comment(other);

    assert_eq!(thread.comment(seed).unwrap().like_count(), 4);
    assert_eq!(thread.comment(other).unwrap().like_count(), 5);
}

#[test]
fn like_unknown_comment_is_a_no_op() {
    let mut thread = controller();
    assert_eq!(thread.like_comment(uuid::Uuid::new_v4()), None);
    assert_eq!(thread.comments()[0].like_count(), 0);
}

#[test]
fn delete_by_text_removes_every_duplicate() {
    let mut thread = controller();
    thread.update_draft("primeiro");
    thread.submit_comment().unwrap();
    thread.update_draft("primeiro");
    thread.submit_comment().unwrap();

    let duplicates = thread
        .comments()
        .iter()
        .filter(|entry| entry.text() == "primeiro")
        .count();
    assert_eq!(duplicates, 2);

    assert_eq!(thread.delete_comments_with_text("primeiro"), 2);
    assert_eq!(thread.comment_count(), 1);
    assert_eq!(thread.comments()[0].text(), DEFAULT_SEED_COMMENT);
}

#[test]
fn delete_by_id_removes_only_that_duplicate() {
    let mut thread = controller();
    thread.update_draft("primeiro");
    let first = thread.submit_comment().unwrap();
    thread.update_draft("primeiro");
    let second = thread.submit_comment().unwrap();

    assert!(thread.delete_comment(first));
    assert!(thread.comment(first).is_none());
    assert!(thread.comment(second).is_some());
    assert_eq!(thread.comment_count(), 2);
}

#[test]
fn deleting_missing_comments_is_a_no_op() {
    let mut thread = controller();
    let before: Vec<_> = thread.comments().to_vec();

    assert_eq!(thread.delete_comments_with_text("não existe"), 0);
    assert!(!thread.delete_comment(uuid::Uuid::new_v4()));
    assert_eq!(thread.comments(), before.as_slice());
}

#[test]
fn delete_request_round_trips_through_the_thread() {
    let mut thread = controller();
    thread.update_draft("apagar");
    let id = thread.submit_comment().unwrap();

    let request = thread.comment(id).unwrap().request_delete();
    assert_eq!(request.text, "apagar");
    assert_eq!(thread.comment_count(), 2);

    assert!(thread.delete_comment(request.comment_id));
    assert_eq!(thread.comment_count(), 1);
}

#[test]
fn disabled_seed_starts_with_empty_thread() {
    let config = FeedConfig {
        seed_comment: Some(String::new()),
        ..FeedConfig::default()
    };
    assert_eq!(PostController::new(9, &config).comment_count(), 0);

    let config = FeedConfig {
        seed_comment: None,
        ..FeedConfig::default()
    };
    assert_eq!(PostController::new(9, &config).comment_count(), 0);
}

#[test]
fn seeded_thread_only_holds_comments_the_policy_accepts() {
    let config = FeedConfig {
        seed_comment: Some(" \n\t".to_string()),
        ..FeedConfig::default()
    };
    let thread = PostController::new(9, &config);
    assert_eq!(thread.comment_count(), 0);

    let config = FeedConfig {
        draft_policy: DraftPolicy::RejectEmpty,
        seed_comment: Some(" \n\t".to_string()),
        ..FeedConfig::default()
    };
    let thread = PostController::new(9, &config);
    assert_eq!(thread.comment_count(), 1);
    assert!(thread
        .comments()
        .iter()
        .all(|entry| DraftPolicy::RejectEmpty.accepts(entry.text())));
}
