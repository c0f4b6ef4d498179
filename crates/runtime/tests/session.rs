use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use cue_core::{
    BallName, CenturyAction, CenturyMatch, CenturyState, FixedClock, GameConfig, HistoryError,
    ModeRegistry, PlayerId, SnookerAction, SnookerState, Winner,
};
use cue_runtime::{
    FileStateRepository, InMemoryStateRepo, RepositoryError, RuntimeError, Session, Slot,
    StateRepository,
};

const CLOCK: FixedClock = FixedClock::at_millis(1_700_000_000_000);

type Snooker = Session<SnookerState, FixedClock>;
type Century = Session<CenturyState, FixedClock>;

fn memory() -> Arc<dyn StateRepository> {
    Arc::new(InMemoryStateRepo::new())
}

fn singles_2() -> GameConfig {
    ModeRegistry::builtin().resolve("singles-2").unwrap()
}

fn open_snooker(repo: &Arc<dyn StateRepository>) -> Snooker {
    Session::open(repo.clone(), CLOCK, &GameConfig::snooker_singles()).unwrap()
}

fn open_century(repo: &Arc<dyn StateRepository>) -> Century {
    Session::open(repo.clone(), CLOCK, &singles_2()).unwrap()
}

/// Pots blacks and a yellow so player 1 lands exactly on 100.
fn play_to_hundred(session: &mut Century) {
    for _ in 0..14 {
        session.apply(&CenturyAction::pot(BallName::Black)).unwrap();
    }
    session.apply(&CenturyAction::pot(BallName::Yellow)).unwrap();
}

#[test]
fn fresh_session_is_saved_immediately() {
    let repo = memory();
    let session = open_snooker(&repo);

    assert!(!session.resumed());
    assert!(repo.exists(Slot::Snooker));
    assert!(!repo.exists(Slot::Century));
}

#[test]
fn reopening_resumes_the_saved_match() {
    let repo = memory();
    let mut session = open_snooker(&repo);
    session.apply(&SnookerAction::pot(BallName::Red)).unwrap();
    session.apply(&SnookerAction::pot(BallName::Black)).unwrap();
    let live = session.into_match();

    let resumed = open_snooker(&repo);
    assert!(resumed.resumed());
    assert_eq!(resumed.game(), &live);
    assert_eq!(resumed.state().current_break(), 8);
    assert_eq!(resumed.game().undo_depth(), 2);
}

#[test]
fn malformed_blob_is_replaced_by_a_fresh_match() {
    let repo: Arc<dyn StateRepository> =
        Arc::new(InMemoryStateRepo::with_blob(Slot::Century, "{\"state\": 12"));

    let session = open_century(&repo);
    assert!(!session.resumed());

    let stored = repo.load(Slot::Century).unwrap().unwrap();
    let restored = CenturyMatch::from_blob(&stored).unwrap();
    assert_eq!(restored.state().mode_id, "singles-2");
}

#[test]
fn decided_blob_is_not_resumed() {
    let mut finished = CenturyMatch::new(&singles_2(), &CLOCK).unwrap();
    for _ in 0..14 {
        finished
            .execute(&CenturyAction::pot(BallName::Black), &CLOCK)
            .unwrap();
    }
    finished
        .execute(&CenturyAction::pot(BallName::Yellow), &CLOCK)
        .unwrap();
    assert!(finished.winner().is_some());

    let repo: Arc<dyn StateRepository> = Arc::new(InMemoryStateRepo::with_blob(
        Slot::Century,
        finished.to_blob().unwrap(),
    ));

    let session = open_century(&repo);
    assert!(!session.resumed());
    assert!(session.winner().is_none());
    assert_eq!(session.state().players.get(0).unwrap().score, 0);
}

#[test]
fn win_clears_the_slot() {
    let repo = memory();
    let mut session = open_century(&repo);

    play_to_hundred(&mut session);

    assert_eq!(session.winner(), Some(Winner::Player(PlayerId(1))));
    assert!(!repo.exists(Slot::Century));
    assert!(!session.can_undo());
}

#[test]
fn rejected_action_leaves_storage_untouched() {
    let repo = memory();
    let mut session = open_snooker(&repo);
    session.apply(&SnookerAction::pot(BallName::Red)).unwrap();
    let before = repo.load(Slot::Snooker).unwrap();

    let err = session.apply(&SnookerAction::foul_with(0)).unwrap_err();
    assert!(matches!(err, RuntimeError::Execute(_)));
    assert!(err.is_rejection());
    assert_eq!(err.error_code(), Some("SNOOKER_INVALID_PENALTY"));

    assert_eq!(repo.load(Slot::Snooker).unwrap(), before);
    assert_eq!(session.game().undo_depth(), 1);
}

#[test]
fn undo_is_persisted() {
    let repo = memory();
    let mut session = open_century(&repo);
    session.apply(&CenturyAction::pot(BallName::Pink)).unwrap();
    session.undo().unwrap();

    let err = session.undo().unwrap_err();
    assert!(matches!(err, RuntimeError::History(HistoryError::Empty)));

    let resumed = open_century(&repo);
    assert!(resumed.resumed());
    assert_eq!(resumed.state().players.get(0).unwrap().score, 0);
    assert_eq!(resumed.game().undo_depth(), 0);
}

#[test]
fn rename_is_persisted_and_survives_undo() {
    let repo = memory();
    let mut session = open_century(&repo);
    session.apply(&CenturyAction::pot(BallName::Blue)).unwrap();
    session.rename(PlayerId(1), "  Ann ").unwrap();

    let mut resumed = open_century(&repo);
    resumed.undo().unwrap();
    let player = resumed.state().players.by_id(PlayerId(1)).unwrap();
    assert_eq!(player.display_name(), "Ann");

    let err = resumed.rename(PlayerId(7), "Ghost").unwrap_err();
    assert!(matches!(err, RuntimeError::State(_)));
}

#[test]
fn reset_replaces_the_match() {
    let repo = memory();
    let mut session = open_century(&repo);
    session.apply(&CenturyAction::pot(BallName::Brown)).unwrap();

    let quads = ModeRegistry::builtin().resolve("quadruples").unwrap();
    session.reset(&quads).unwrap();

    assert_eq!(session.state().players.len(), 8);
    assert!(!session.can_undo());
    let stored = repo.load(Slot::Century).unwrap().unwrap();
    assert_eq!(
        CenturyMatch::from_blob(&stored).unwrap().state().mode_id,
        "quadruples"
    );
}

#[test]
fn wrong_variant_config_is_refused() {
    let err = Century::open(memory(), CLOCK, &GameConfig::snooker_singles()).unwrap_err();
    assert!(matches!(err, RuntimeError::Config(_)));
}

#[test]
fn file_repository_resumes_across_instances() {
    let dir = tempfile::tempdir().unwrap();

    {
        let repo: Arc<dyn StateRepository> =
            Arc::new(FileStateRepository::new(dir.path()).unwrap());
        let mut session = open_snooker(&repo);
        session.apply(&SnookerAction::pot(BallName::Red)).unwrap();
        session.rename(PlayerId(2), "Bea").unwrap();
    }
    assert!(dir.path().join("snooker_game_state.json").exists());

    let repo: Arc<dyn StateRepository> = Arc::new(FileStateRepository::new(dir.path()).unwrap());
    let session = open_snooker(&repo);
    assert!(session.resumed());
    assert_eq!(session.state().current_break(), 1);
    assert_eq!(
        session.state().players.get(1).unwrap().display_name(),
        "Bea"
    );
}

/// In-memory repository whose writes can be switched off.
#[derive(Default)]
struct ReadOnlyToggle {
    inner: InMemoryStateRepo,
    read_only: AtomicBool,
}

impl ReadOnlyToggle {
    fn refuse_writes(&self, refuse: bool) {
        self.read_only.store(refuse, Ordering::SeqCst);
    }
}

impl StateRepository for ReadOnlyToggle {
    fn save(&self, slot: Slot, blob: &str) -> cue_runtime::repository::Result<()> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(RepositoryError::Io(std::io::Error::other("read-only")));
        }
        self.inner.save(slot, blob)
    }

    fn load(&self, slot: Slot) -> cue_runtime::repository::Result<Option<String>> {
        self.inner.load(slot)
    }

    fn exists(&self, slot: Slot) -> bool {
        self.inner.exists(slot)
    }

    fn delete(&self, slot: Slot) -> cue_runtime::repository::Result<()> {
        self.inner.delete(slot)
    }
}

#[test]
fn failed_save_keeps_the_action_and_can_be_retried() {
    let toggle = Arc::new(ReadOnlyToggle::default());
    let repo: Arc<dyn StateRepository> = toggle.clone();
    let mut session = open_century(&repo);

    toggle.refuse_writes(true);
    let err = session
        .apply(&CenturyAction::pot(BallName::Green))
        .unwrap_err();
    assert!(matches!(err, RuntimeError::Repository(_)));
    assert!(!err.is_rejection());

    assert_eq!(session.state().players.get(0).unwrap().score, 3);
    assert!(session.can_undo());
    let stored = CenturyMatch::from_blob(&repo.load(Slot::Century).unwrap().unwrap()).unwrap();
    assert_eq!(stored.state().players.get(0).unwrap().score, 0);

    toggle.refuse_writes(false);
    session.persist().unwrap();
    let stored = CenturyMatch::from_blob(&repo.load(Slot::Century).unwrap().unwrap()).unwrap();
    assert_eq!(&stored, session.game());
}
