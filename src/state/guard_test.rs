use super::*;

// =============================================================
// Route classification
// =============================================================

#[test]
fn login_and_register_are_public() {
    assert!(is_public("/login"));
    assert!(is_public("/register"));
}

#[test]
fn everything_else_is_protected() {
    assert!(!is_public("/dashboard"));
    assert!(!is_public("/batches"));
    assert!(!is_public("/checkin"));
    assert!(!is_public("/"));
    assert!(!is_public(""));
    // Classification is exact, not prefix-based.
    assert!(!is_public("/login/extra"));
}

// =============================================================
// Guard decisions
// =============================================================

#[test]
fn loading_always_wins() {
    assert_eq!(evaluate("/login", None, true), GuardDecision::Loading);
    assert_eq!(evaluate("/dashboard", None, true), GuardDecision::Loading);
    assert_eq!(evaluate("/login", Some("xyz"), true), GuardDecision::Loading);
}

#[test]
fn protected_path_without_token_redirects_to_login() {
    assert_eq!(
        evaluate("/dashboard", None, false),
        GuardDecision::RedirectToLogin
    );
    assert_eq!(
        evaluate("/students", None, false),
        GuardDecision::RedirectToLogin
    );
}

#[test]
fn public_path_with_token_redirects_to_landing() {
    assert_eq!(
        evaluate("/login", Some("xyz"), false),
        GuardDecision::RedirectToLanding
    );
    assert_eq!(
        evaluate("/register", Some("xyz"), false),
        GuardDecision::RedirectToLanding
    );
}

#[test]
fn matching_path_and_token_render() {
    assert_eq!(evaluate("/login", None, false), GuardDecision::Render);
    assert_eq!(evaluate("/dashboard", Some("xyz"), false), GuardDecision::Render);
}

#[test]
fn evaluation_is_deterministic() {
    // Same inputs, same decision, however many times it runs.
    for _ in 0..3 {
        assert_eq!(
            evaluate("/reports", Some("abc"), false),
            GuardDecision::Render
        );
        assert_eq!(evaluate("/reports", None, false), GuardDecision::RedirectToLogin);
    }
}
