//! Integration tests for profile management
//!
//! These tests verify the profile lifecycle: absence before the first save,
//! timestamp stamping, and wholesale field replacement on every save.

#[cfg(test)]
mod profile_tests {
    use fire_arena::identity::{Identity, ProfileUpdate};
    use fire_arena::{Arena, ArenaConfig};

    #[tokio::test]
    async fn test_profile_absent_until_first_save() {
        let arena = create_arena();
        let player = Identity::new("player-1");

        assert!(arena.user_profile(&player).await.is_none());

        arena
            .save_user_profile(&player, update("FF100", "Ada"))
            .await
            .unwrap();

        let view = arena.user_profile(&player).await.unwrap();
        assert_eq!(view.free_fire_uid.as_deref(), Some("FF100"));
        assert_eq!(view.display_name.as_deref(), Some("Ada"));
    }

    #[tokio::test]
    async fn test_first_save_stamps_both_timestamps_equal() {
        let arena = create_arena();
        let player = Identity::new("player-2");

        let view = arena
            .save_user_profile(&player, update("FF200", "Bo"))
            .await
            .unwrap();

        assert_eq!(view.created_at, view.updated_at);
    }

    #[tokio::test]
    async fn test_resave_preserves_created_at_and_advances_updated_at() {
        let arena = create_arena();
        let player = Identity::new("player-3");

        let first = arena
            .save_user_profile(&player, update("FF300", "Cy"))
            .await
            .unwrap();
        let second = arena
            .save_user_profile(&player, update("FF301", "Cy"))
            .await
            .unwrap();

        assert_eq!(second.created_at, first.created_at);
        assert!(second.updated_at >= first.updated_at);
        assert!(second.updated_at >= second.created_at);
    }

    #[tokio::test]
    async fn test_save_replaces_optional_fields_wholesale() {
        let arena = create_arena();
        let player = Identity::new("player-4");

        arena
            .save_user_profile(&player, update("FF400", "Dee"))
            .await
            .unwrap();

        // A payload without freeFireUid clears the stored uid rather than
        // keeping the old value.
        let view = arena
            .save_user_profile(
                &player,
                ProfileUpdate {
                    free_fire_uid: None,
                    display_name: Some("Dee Two".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(view.free_fire_uid, None);
        assert_eq!(view.display_name.as_deref(), Some("Dee Two"));
    }

    #[tokio::test]
    async fn test_empty_payload_clears_both_fields() {
        let arena = create_arena();
        let player = Identity::new("player-5");

        arena
            .save_user_profile(&player, update("FF500", "Eli"))
            .await
            .unwrap();
        let view = arena
            .save_user_profile(&player, ProfileUpdate::default())
            .await
            .unwrap();

        assert_eq!(view.free_fire_uid, None);
        assert_eq!(view.display_name, None);
    }

    #[tokio::test]
    async fn test_profiles_are_scoped_per_identity() {
        let arena = create_arena();
        let first = Identity::new("player-6");
        let second = Identity::new("player-7");

        arena
            .save_user_profile(&first, update("FF600", "Fay"))
            .await
            .unwrap();

        assert!(arena.user_profile(&second).await.is_none());

        arena
            .save_user_profile(&second, update("FF700", "Gus"))
            .await
            .unwrap();

        let first_view = arena.user_profile(&first).await.unwrap();
        let second_view = arena.user_profile(&second).await.unwrap();
        assert_eq!(first_view.free_fire_uid.as_deref(), Some("FF600"));
        assert_eq!(second_view.free_fire_uid.as_deref(), Some("FF700"));
    }

    #[tokio::test]
    async fn test_anyone_may_read_any_profile() {
        // Arbitrary-identity profile reads are part of the observed contract;
        // no role or ownership check applies.
        let arena = create_arena();
        let owner = Identity::new("player-8");

        arena
            .save_user_profile(&owner, update("FF800", "Hal"))
            .await
            .unwrap();

        let view = arena.user_profile(&owner).await.unwrap();
        assert_eq!(view.display_name.as_deref(), Some("Hal"));
    }

    // Helper functions

    fn create_arena() -> Arena {
        Arena::new(ArenaConfig {
            bootstrap_admins: vec![Identity::new("bootstrap-admin")],
        })
    }

    fn update(uid: &str, name: &str) -> ProfileUpdate {
        ProfileUpdate {
            free_fire_uid: Some(uid.to_string()),
            display_name: Some(name.to_string()),
        }
    }
}
