//! Most-valuable-victim / least-valuable-attacker capture scores.

use crate::game_state::chess_types::PieceKind;

/// `MVV_LVA[attacker][victim]`, from 105 (pawn takes pawn) to 600 (king takes king).
pub const MVV_LVA: [[i32; 6]; 6] = build_mvv_lva();

const fn build_mvv_lva() -> [[i32; 6]; 6] {
    let mut table = [[0; 6]; 6];
    let mut attacker = 0;
    while attacker < 6 {
        let mut victim = 0;
        while victim < 6 {
            table[attacker][victim] = 100 * (victim as i32 + 1) + (5 - attacker as i32);
            victim += 1;
        }
        attacker += 1;
    }
    table
}

#[inline]
pub const fn mvv_lva_score(attacker: PieceKind, victim: PieceKind) -> i32 {
    MVV_LVA[attacker.index()][victim.index()]
}
