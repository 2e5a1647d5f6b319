mod ignore_negation_in_status;
mod print_clean_status_after_commit;
mod report_deleted_files;
mod report_staged_and_unstaged_changes_together;
