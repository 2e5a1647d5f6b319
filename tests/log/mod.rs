mod show_history_in_oneline_format;
mod show_log_with_no_commits;
