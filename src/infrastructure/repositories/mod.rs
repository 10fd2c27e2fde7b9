pub mod in_memory_case_repository;
