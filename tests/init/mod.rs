mod init_twice_fails;
mod commands_outside_a_repository_fail;
