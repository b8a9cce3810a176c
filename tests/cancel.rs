#[cfg(test)]
mod tests {
    use playdesk::libs::cancel::CancelToken;
    use playdesk::libs::error::PlaydeskError;
    use std::future::pending;

    #[test]
    fn test_clones_share_state() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());

        token.cancel();
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[tokio::test]
    async fn test_guard_passes_output_through() {
        let token = CancelToken::new();
        assert_eq!(token.guard(async { 42 }).await.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_guard_on_cancelled_token() {
        let token = CancelToken::new();
        token.cancel();
        assert!(matches!(token.guard(async { 42 }).await, Err(PlaydeskError::Cancelled)));
    }

    #[tokio::test]
    async fn test_cancel_interrupts_pending_future() {
        let token = CancelToken::new();
        let canceller = token.clone();

        let (result, _) = tokio::join!(token.guard(pending::<()>()), async move {
            tokio::task::yield_now().await;
            canceller.cancel();
        });

        assert!(result.unwrap_err().is_cancelled());
    }

    #[test]
    fn test_error_classification() {
        assert!(PlaydeskError::Cancelled.is_cancelled());
        assert!(!PlaydeskError::Cancelled.is_transport());
        assert!(PlaydeskError::Transport("502".to_string()).is_transport());
        assert!(!PlaydeskError::InvalidInput("x".to_string()).is_transport());

        let io = PlaydeskError::from(std::io::Error::other("disk"));
        assert!(!io.is_transport());
    }
}
