pub mod iam_domain_error;
