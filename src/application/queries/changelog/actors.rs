use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::{changelog::ChangeFilter, user::AccountDirectory};

/// `user` and `user_id` are choices among existing accounts; naming an
/// unknown account is a client error rather than an empty result.
pub(super) async fn ensure_known_actors(
    accounts: &dyn AccountDirectory,
    filter: &ChangeFilter,
) -> ApplicationResult<()> {
    if !filter.user_ids.is_empty() {
        let known = accounts.existing_ids(&filter.user_ids).await?;
        if let Some(missing) = filter.user_ids.iter().find(|id| !known.contains(id)) {
            return Err(ApplicationError::invalid_choice("user_id", missing));
        }
    }

    if !filter.users.is_empty() {
        let known = accounts.existing_usernames(&filter.users).await?;
        if let Some(missing) = filter.users.iter().find(|name| !known.contains(name)) {
            return Err(ApplicationError::invalid_choice("user", missing));
        }
    }

    Ok(())
}
