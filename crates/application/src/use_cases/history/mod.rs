mod get_ban_history;

pub use get_ban_history::GetBanHistoryUseCase;
