use duel::battle::Battle;

/// Asserts that new logs in the battle are equal to the given logs.
#[track_caller]
pub fn assert_new_logs_eq(battle: &mut Battle, want: &[&str]) {
    let got = battle.new_logs().collect::<Vec<&str>>();
    pretty_assertions::assert_eq!(got, want)
}

/// Marks all logs in the battle as read, so later assertions only see new logs.
pub fn skip_new_logs(battle: &mut Battle) {
    battle.new_logs().for_each(drop);
}
