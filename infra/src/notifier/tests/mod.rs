mod http_mail_tests;
mod log_notifier_tests;
