//! # REST endpoints
//!
//! One async function per backend endpoint. Each takes the [`ApiClient`] first
//! and forwards its arguments as path segments, query parameters or a JSON
//! body; errors have already been classified and surfaced by the client when
//! they reach the caller.
//!
//! | Module | Base path | Notes |
//! |--------|-----------|-------|
//! | [`auth`] | `/auth` | login, logout, current user, password change, token refresh |
//! | [`grade`] | `/basic/grade` | standard CRUD + `all_active`, `by_school_year` |
//! | [`class`] | `/basic/class` | standard CRUD + `all_active`, `by_grade`, `update_student_count` |
//! | [`student`] | `/students` | standard CRUD + `by_class`, `by_code` |
//! | [`teacher`] | `/teachers` | standard CRUD + `active`, `head_teachers` |
//! | [`course`] | `/courses` | standard CRUD + `active`, `by_stage` |
//! | [`exam`] | `/exams` | standard CRUD + `current`, `by_term`, lifecycle transitions |
//! | [`score`] | `/grade/score` | entry template, batch save, rankings, statistics |
//! | [`user`] | `/users` | standard CRUD |
//! | [`role`] | `/roles` | standard CRUD + permissions |
//!
//! "Standard CRUD" is the set generated from [`crud::Resource`].
//!
//! [`ApiClient`]: crate::ApiClient

pub mod auth;
pub mod class;
pub mod course;
pub mod crud;
pub mod exam;
pub mod grade;
pub mod role;
pub mod score;
pub mod student;
pub mod teacher;
pub mod user;
