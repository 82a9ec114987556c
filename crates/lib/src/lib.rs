//! Subtitle lookup for video files against the Napiprojekt service.
//!
//! A video is identified by the MD5 of its first 10 MiB ([`hash::Digest`]) and a
//! short key derived from that digest ([`hash::Fingerprint`]). Both are sent to the
//! service by [`api::NapiClient`]; [`subtitles`] handles naming and writing the
//! downloaded text next to the video.

pub mod api;
pub mod consts;
pub mod hash;
pub mod subtitles;
