//! Static two-level administrative hierarchy for region matching.
//!
//! Declaration order is significant: it is the tie-break when a district
//! name collides across provinces (중구 exists in 서울, 부산, 대구, …) —
//! the first declared province wins.

/// Catch-all classification meaning "no specific regional restriction
/// detected in this text".
pub const NATIONWIDE: &str = "전국";

/// One top-level administrative region.
///
/// `aliases` are matched as substrings of free text, in order; the first
/// alias is the canonical name a match is classified under. `districts`
/// are second-level subdivisions, also matched as substrings.
#[derive(Debug, Clone, Copy)]
pub struct Province {
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub districts: &'static [&'static str],
}

/// The full hierarchy, in matching-priority order.
pub static REGION_HIERARCHY: &[Province] = &[
    Province {
        canonical: "서울",
        aliases: &["서울"],
        districts: &[
            "종로", "중구", "용산", "성동", "광진", "동대문", "중랑", "성북", "강북",
            "도봉", "노원", "은평", "서대문", "마포", "양천", "강서", "구로", "금천",
            "영등포", "동작", "관악", "서초", "강남", "송파", "강동",
        ],
    },
    Province {
        canonical: "부산",
        aliases: &["부산"],
        districts: &[
            "중구", "서구", "동구", "영도", "부산진", "동래", "남구", "북구", "해운대",
            "사하", "금정", "강서", "연제", "수영", "사상", "기장",
        ],
    },
    Province {
        canonical: "대구",
        aliases: &["대구"],
        districts: &["중구", "동구", "서구", "남구", "북구", "수성", "달서", "달성"],
    },
    Province {
        canonical: "인천",
        aliases: &["인천"],
        districts: &[
            "중구", "동구", "미추홀", "연수", "남동", "부평", "계양", "서구", "강화",
            "옹진",
        ],
    },
    Province {
        canonical: "광주",
        aliases: &["광주"],
        districts: &["동구", "서구", "남구", "북구", "광산"],
    },
    Province {
        canonical: "대전",
        aliases: &["대전"],
        districts: &["동구", "중구", "서구", "유성", "대덕"],
    },
    Province {
        canonical: "울산",
        aliases: &["울산"],
        districts: &["중구", "남구", "동구", "북구", "울주"],
    },
    Province {
        canonical: "세종",
        aliases: &["세종"],
        districts: &["세종"],
    },
    Province {
        canonical: "경기",
        aliases: &["경기"],
        districts: &[
            "수원", "성남", "안양", "안산", "용인", "부천", "광명", "평택", "과천",
            "오산", "시흥", "군포", "의왕", "하남", "이천", "안성", "김포", "화성",
            "광주", "양주", "포천", "여주", "연천", "가평", "양평",
        ],
    },
    Province {
        canonical: "강원",
        aliases: &["강원"],
        districts: &[
            "춘천", "원주", "강릉", "동해", "태백", "속초", "삼척", "홍천", "횡성",
            "영월", "평창", "정선", "철원", "화천", "양구", "인제", "고성", "양양",
        ],
    },
    Province {
        canonical: "충북",
        aliases: &["충북", "충청북도"],
        districts: &[
            "청주", "충주", "제천", "보은", "옥천", "영동", "증평", "진천", "괴산",
            "음성", "단양",
        ],
    },
    Province {
        canonical: "충남",
        aliases: &["충남", "충청남도"],
        districts: &[
            "천안", "공주", "보령", "아산", "서산", "논산", "계룡", "당진", "금산",
            "부여", "서천", "청양", "홍성", "예산", "태안",
        ],
    },
    Province {
        canonical: "전북",
        aliases: &["전북", "전라북도"],
        districts: &[
            "전주", "군산", "익산", "정읍", "남원", "김제", "완주", "진안", "무주",
            "장수", "임실", "순창", "고창", "부안",
        ],
    },
    Province {
        canonical: "전남",
        aliases: &["전남", "전라남도"],
        districts: &[
            "목포", "여수", "순천", "나주", "광양", "담양", "곡성", "구례", "고흥",
            "보성", "화순", "장흥", "강진", "해남", "영암", "무안", "함평", "영광",
            "장성", "완도", "진도", "신안",
        ],
    },
    Province {
        canonical: "경북",
        aliases: &["경북", "경상북도"],
        districts: &[
            "포항", "경주", "김천", "안동", "구미", "영주", "영천", "상주", "문경",
            "경산", "군위", "의성", "청송", "영양", "영덕", "청도", "고령", "성주",
            "칠곡", "예천", "봉화", "울진", "울릉",
        ],
    },
    Province {
        canonical: "경남",
        aliases: &["경남", "경상남도"],
        districts: &[
            "창원", "진주", "통영", "사천", "김해", "밀양", "거제", "양산", "의령",
            "함안", "창녕", "고성", "남해", "하동", "산청", "함양", "거창", "합천",
        ],
    },
    Province {
        canonical: "제주",
        aliases: &["제주"],
        districts: &["제주", "서귀포"],
    },
];
