mod helpers;
mod http_repository;
mod scenarios;
