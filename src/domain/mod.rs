//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈입니다.
//! 이 서비스가 다루는 엔티티는 사용자(`Usuario`) 하나뿐입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! └── Entities      - 핵심 비즈니스 객체 (Usuario)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! 도메인 레코드는 저장소 표현(SeaORM 모델)과 분리되어 있으며,
//! HTTP 요청/응답 본문으로도 그대로 사용됩니다.

pub mod entities;
