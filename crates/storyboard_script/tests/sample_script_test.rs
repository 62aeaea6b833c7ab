use storyboard_core::SceneDescriptor;
use storyboard_script::{SAMPLE_SCRIPT, ScriptParser, parse_script};

#[test]
fn test_sample_script_scene_labels() {
    let scenes = parse_script(SAMPLE_SCRIPT);
    let labels: Vec<&str> = scenes.iter().map(SceneDescriptor::label).collect();

    assert_eq!(
        labels,
        vec![
            "1. 外景 - 未来城市 - 白天",
            "2. 内景 - 咖啡馆 - 白天",
            "4. 外景 - 科技艺术展 - 夜晚",
            "7. 内景 - 庆功派对 - 夜晚",
            "10. 内景 - 迈克秘密基地 (月球背面飞船) - 夜晚",
            "11. 外景 - 未来地球 / 内景 - 玛丽的晚年居所 - 蒙太奇",
            "16. 外景 - 浩瀚星海 - 宇宙",
        ]
    );
}

#[test]
fn test_sample_script_merges_visual_and_close_up() {
    let scenes = parse_script(SAMPLE_SCRIPT);
    let cafe = &scenes[1];

    assert!(cafe.description().starts_with("露天咖啡馆里，玛丽坐在桌前"));
    assert!(cafe.description().ends_with("最终定格在玛丽身上。"));
    assert!(cafe.description().contains("寻找灵感。 迈克的眼睛"));
}

#[test]
fn test_sample_script_skips_untagged_brackets() {
    let scenes = parse_script(SAMPLE_SCRIPT);

    assert_eq!(
        scenes[3].description(),
        "流光溢彩的派对。亨利将玛丽拥在怀中，接受众人祝贺。"
    );
    assert!(!scenes[6].description().contains("镜头拉远"));
}

#[test]
fn test_sample_script_title_is_not_a_scene() {
    let scenes = parse_script(SAMPLE_SCRIPT);
    assert!(scenes.iter().all(|s| !s.label().contains("电影剧本")));
}

#[test]
fn test_explicit_default_parser_agrees_with_shared_one() {
    let parser = ScriptParser::new();
    assert_eq!(parser.parse(SAMPLE_SCRIPT), parse_script(SAMPLE_SCRIPT));
}

#[test]
fn test_parsing_from_many_threads() -> anyhow::Result<()> {
    let expected = parse_script(SAMPLE_SCRIPT);
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| parse_script(SAMPLE_SCRIPT)))
        .collect();

    for handle in handles {
        let scenes = handle
            .join()
            .map_err(|_| anyhow::anyhow!("parser thread panicked"))?;
        assert_eq!(scenes, expected);
    }
    Ok(())
}
