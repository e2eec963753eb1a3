// --- File: crates/linebook_booking/src/messages.rs ---
//! Reply texts sent back to the LINE user.

use crate::models::BookingDraft;

pub const NO_PENDING: &str = "ยังไม่มีนัดให้ยืนยัน";
pub const CONFIRMED: &str = "✅ บันทึกนัดและสร้าง Calendar แล้ว";
pub const DISPATCH_FAILED: &str = "❌ บันทึกนัดไม่สำเร็จ กรุณาพิมพ์ CONFIRM อีกครั้ง";
pub const USAGE: &str = "รูปแบบไม่ถูกต้อง\nตัวอย่าง: 12/02 13:00-17:00 ลูกค้า A";

/// The summary prompt asking the sender to type `CONFIRM`.
pub fn summary(draft: &BookingDraft) -> String {
    format!(
        "📅 สรุปนัดหมาย\nวันที่: {}\nเวลา: {}\nรายละเอียด: {}\n\nพิมพ์ CONFIRM เพื่อบันทึก",
        draft.date_string(),
        draft.time_range_string(),
        draft.label
    )
}
