use ships::{
    BoardSide, CellState, CellView, ChannelSource, Coord, GamePhase, GameSession, GridBoard,
    InputEvent, MemoryStore, NullRenderer, Renderer, SessionDriver,
};
use tokio::time::{sleep, Duration};

#[derive(Default)]
struct Recorder {
    draws: Vec<(BoardSide, Vec<CellView>)>,
    banners: Vec<GamePhase>,
    rejections: Vec<String>,
}

impl Renderer for Recorder {
    fn draw(&mut self, side: BoardSide, _board: &GridBoard, changed: &[CellView]) {
        self.draws.push((side, changed.to_vec()));
    }

    fn banner(&mut self, phase: GamePhase) {
        self.banners.push(phase);
    }

    fn rejected(&mut self, reason: &str) {
        self.rejections.push(reason.to_string());
    }
}

fn a(col: u8, row: u8) -> Coord {
    Coord::new(col, row)
}

#[tokio::test(start_paused = true)]
async fn trailing_click_is_swallowed_until_touched_clears() {
    use InputEvent::*;
    let (tx, source) = ChannelSource::channel();
    let mut session = GameSession::new(MemoryStore::new());
    session.start_battle().unwrap();
    let mut driver = SessionDriver::new(session, source, NullRenderer);

    let script = async move {
        tx.send(PointerDown(BoardSide::Opponent, a(0, 0))).unwrap();
        tx.send(PointerMove(BoardSide::Opponent, a(1, 0))).unwrap();
        tx.send(PointerUp).unwrap();
        tx.send(Click(BoardSide::Opponent, a(1, 0))).unwrap();
        sleep(Duration::from_millis(150)).await;
        tx.send(Click(BoardSide::Opponent, a(1, 0))).unwrap();
        tx.send(Quit).unwrap();
    };
    let (result, ()) = tokio::join!(driver.run(), script);
    result.unwrap();

    let opponent = driver.session().opponent();
    assert_eq!(opponent.get(a(0, 0)), Some(CellState::Hit));
    assert_eq!(opponent.get(a(1, 0)), Some(CellState::HitShip));
    assert!(opponent.gesture().touched().len() <= 1);
}

#[tokio::test(start_paused = true)]
async fn touched_cells_survive_until_the_delay_passes() {
    use InputEvent::*;
    let (tx, source) = ChannelSource::channel();
    let mut session = GameSession::new(MemoryStore::new());
    session.start_battle().unwrap();
    let mut driver = SessionDriver::new(session, source, NullRenderer)
        .with_drag_clear_delay(Duration::from_millis(500));

    let script = async move {
        tx.send(Click(BoardSide::Opponent, a(2, 2))).unwrap();
        tx.send(PointerUp).unwrap();
        sleep(Duration::from_millis(200)).await;
        tx.send(Click(BoardSide::Opponent, a(2, 2))).unwrap();
        sleep(Duration::from_millis(600)).await;
        tx.send(Click(BoardSide::Opponent, a(2, 2))).unwrap();
        tx.send(Quit).unwrap();
    };
    let (result, ()) = tokio::join!(driver.run(), script);
    result.unwrap();

    // first click toggles, second is inside the window and re-arms it,
    // third comes after the re-armed deadline
    assert_eq!(
        driver.session().opponent().get(a(2, 2)),
        Some(CellState::HitShip)
    );
}

#[tokio::test(start_paused = true)]
async fn separate_clicks_without_pointer_up_round_trip() {
    use InputEvent::*;
    let (tx, source) = ChannelSource::channel();
    let mut driver = SessionDriver::new(
        GameSession::new(MemoryStore::new()),
        source,
        NullRenderer,
    );

    let b5: Coord = "B5".parse().unwrap();
    let script = async move {
        tx.send(Click(BoardSide::Own, b5)).unwrap();
        sleep(Duration::from_millis(150)).await;
        tx.send(Click(BoardSide::Own, b5)).unwrap();
        sleep(Duration::from_secs(5)).await;
        tx.send(Click(BoardSide::Own, b5)).unwrap();
        sleep(Duration::from_millis(150)).await;
        tx.send(Click(BoardSide::Own, b5)).unwrap();
        tx.send(Quit).unwrap();
    };
    let (result, ()) = tokio::join!(driver.run(), script);
    result.unwrap();

    let own = driver.session().own();
    assert_eq!(own.get(b5), Some(CellState::Empty));
    assert_eq!(own.count(CellState::Empty), 100);
}

#[tokio::test(start_paused = true)]
async fn marking_clicks_cycle_through_the_driver() {
    use InputEvent::*;
    let (tx, source) = ChannelSource::channel();
    let mut session = GameSession::new(MemoryStore::new());
    session.board_mut(BoardSide::Own).toggle_cell(a(3, 3)).unwrap();
    session.start_battle().unwrap();
    let mut driver = SessionDriver::new(session, source, NullRenderer);

    let script = async move {
        tx.send(Click(BoardSide::Own, a(3, 3))).unwrap();
        sleep(Duration::from_millis(150)).await;
        tx.send(Click(BoardSide::Own, a(3, 3))).unwrap();
        tx.send(Quit).unwrap();
    };
    let (result, ()) = tokio::join!(driver.run(), script);
    result.unwrap();

    assert_eq!(driver.session().own().get(a(3, 3)), Some(CellState::Ship));
}

#[tokio::test]
async fn scripted_game_reaches_the_store() {
    use InputEvent::*;
    let (tx, source) = ChannelSource::channel();
    for event in [
        Click(BoardSide::Own, a(4, 4)),
        EndBattle,
        StartBattle,
        Click(BoardSide::Opponent, a(9, 9)),
        EndBattle,
    ] {
        tx.send(event).unwrap();
    }
    drop(tx);

    let mut driver = SessionDriver::new(
        GameSession::new(MemoryStore::new()),
        source,
        Recorder::default(),
    );
    driver.run().await.unwrap();

    let recorder = driver.renderer();
    assert_eq!(
        recorder.banners,
        vec![GamePhase::Preparing, GamePhase::Battle, GamePhase::Finished]
    );
    assert_eq!(recorder.rejections.len(), 1);
    assert!(recorder.rejections[0].contains("end battle"));

    // initial full draw of both boards, then only the changed cells
    assert_eq!(recorder.draws[0].1.len(), 100);
    assert_eq!(recorder.draws[1].1.len(), 100);
    assert_eq!(recorder.draws[2].0, BoardSide::Own);
    assert_eq!(recorder.draws[2].1.len(), 9);
    assert!(recorder.draws[3..]
        .iter()
        .all(|(_, changed)| changed.len() == 1));

    let session = driver.into_session();
    assert_eq!(session.phase(), GamePhase::Finished);
    let record = session.store().get(1).unwrap();
    assert_eq!(record.data.opponent.get(a(9, 9)), Some(CellState::Hit));
}

#[tokio::test]
async fn out_of_bounds_events_are_reported_not_fatal() {
    use InputEvent::*;
    let (tx, source) = ChannelSource::channel();
    tx.send(Click(BoardSide::Own, a(12, 0))).unwrap();
    tx.send(Click(BoardSide::Own, a(0, 0))).unwrap();
    tx.send(Quit).unwrap();
    tx.send(Click(BoardSide::Own, a(5, 5))).unwrap();

    let mut driver = SessionDriver::new(
        GameSession::new(MemoryStore::new()),
        source,
        Recorder::default(),
    );
    driver.run().await.unwrap();

    assert_eq!(driver.renderer().rejections.len(), 1);
    let own = driver.session().own();
    assert_eq!(own.get(a(0, 0)), Some(CellState::Ship));
    assert_eq!(own.get(a(5, 5)), Some(CellState::Empty));
}
