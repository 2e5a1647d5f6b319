mod commit_empty_index_is_noop;
mod write_commit_object_successfully;
