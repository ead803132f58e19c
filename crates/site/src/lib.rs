//! Client-side state for the portfolio's projects section.
//!
//! The [`section::ProjectsSection`] controller owns the catalog and the
//! visitor's filter, renders cards through [`card::ProjectCardView`], and
//! forwards likes and comments to the [`engagement::EngagementStore`], which
//! applies them optimistically and reconciles with an
//! [`backend::EngagementBackend`].

pub mod backend;
pub mod card;
pub mod config;
pub mod engagement;
pub mod http;
pub mod optimistic;
pub mod section;
pub mod source;
