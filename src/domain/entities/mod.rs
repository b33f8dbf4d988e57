//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//!
//! - **식별성**: 저장소가 부여하는 숫자 ID로 식별
//! - **직렬화**: `serde`로 JSON ↔ Rust 구조체 변환 (camelCase 필드명)
//! - **저장소 독립**: 관계형 테이블 매핑은 `repositories` 계층이 담당

pub mod usuarios;
