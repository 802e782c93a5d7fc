//! Reviews Entity Module
//!
//! 상품 리뷰 엔티티를 정의합니다. 리뷰는 작성자(`user_id`)와
//! 상품(`item_id`)에 각각 하나씩 연결됩니다.

pub mod review;
