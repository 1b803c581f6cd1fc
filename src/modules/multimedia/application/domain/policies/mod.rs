pub mod ordering_policy;
