use super::shape::ShapeSet;

/// 内置 shape 目录，编号固定不变（索引文件按编号记录所用的 shape 组）
pub static SHAPE_CODES: [ShapeSet; 16] = [
    // 0
    ShapeSet {
        label: "4x12",
        patterns: &[
            "111101011101111",
            "111011001100101111",
            "1111001001010001001111",
            "111100101000010010010111",
        ],
    },
    // 1
    ShapeSet {
        label: "16x9",
        patterns: &[
            "1111011111",
            "111001101111",
            "11101100101011",
            "11010010111011",
            "111010100001111",
            "1110100011001011",
            "11100010100101011",
            "11011000001100111",
            "1101010010000010111",
            "11100001000100100111",
            "110110000100010001101",
            "1110000100001000101011",
            "1101010000010001001011",
            "1101001001000010000111",
            "1101000100100000100000111",
            "1110001000100000001010011",
        ],
    },
    // 2
    ShapeSet {
        label: "16x5",
        patterns: &[
            "11001011",
            "101010011",
            "100110101",
            "1110000101",
            "110000100011",
            "1010010000011",
            "1100000010011",
            "11010000000101",
            "100100010000101",
            "1010000000000100011",
            "1010000001000001001",
            "1100000000100001001",
            "10100010000000100001",
            "10010001000000000101",
            "110000000100000010001",
            "10010000100000000000011",
        ],
    },
    // 3
    ShapeSet {
        label: "16x6",
        patterns: &[
            "11101011",
            "110100111",
            "11001000111",
            "1100001001011",
            "10101000010011",
            "101001000001011",
            "1100010000001011",
            "11010000010001001",
            "100100100000010101",
            "101001000100000101",
            "1010001000010000101",
            "11001000000100000011",
            "101000001000000010011",
            "1100010000000100000101",
            "11000001000000000100011",
            "101000010000000000010011",
        ],
    },
    // 4
    ShapeSet {
        label: "16x7",
        patterns: &[
            "1110010111",
            "11001101011",
            "1101001000111",
            "11100010010011",
            "110100101000011",
            "1100100010010101",
            "1101010000010011",
            "1100100000101011",
            "11010001000010011",
            "10101000010001011",
            "11000010010000111",
            "11100000001000001011",
            "110000100010000001101",
            "11010000100000000010011",
            "10100010000010000001011",
            "110001000000010001000101",
        ],
    },
    // 5
    ShapeSet {
        label: "16x4",
        patterns: &[
            "101011",
            "110011",
            "110000101",
            "1001000011",
            "10010000011",
            "110000010001",
            "1100000001001",
            "10001000000101",
            "10100000100001",
            "100100000000011",
            "101000000010001",
            "1010000001000001",
            "1000010000001001",
            "101000000000000011",
            "100010000000000000101",
            "1000100000000000100001",
        ],
    },
    // 6
    ShapeSet {
        label: "4x11",
        patterns: &[
            "111010110110111",
            "111001010101001111",
            "1110110010001101011",
            "11110010000100100010111",
        ],
    },
    // 7
    ShapeSet {
        label: "4x10",
        patterns: &[
            "1110101101111",
            "1110110100010111",
            "10110110001001000111",
            "111010001000010010111",
        ],
    },
    // 8 iedera
    ShapeSet {
        label: "2x10",
        patterns: &[
            "111101110111",
            "111011010010111",
        ],
    },
    // 9 iedera
    ShapeSet {
        label: "16x8",
        patterns: &[
            "1011110111",
            "110100100010111",
            "11001011111",
            "101110001111",
            "11011101100001",
            "1111010010101",
            "111001001001011",
            "10101001101011",
            "111101010011",
            "1111000010000111",
            "1100011011011",
            "1101010000011011",
            "1110001010101001",
            "110011000110011",
            "11011010001101",
            "1101001100010011",
        ],
    },
    // 10
    ShapeSet {
        label: "1x6",
        patterns: &[
            "111111",
        ],
    },
    // 11
    ShapeSet {
        label: "1x5",
        patterns: &[
            "11111",
        ],
    },
    // 12 SpEED
    ShapeSet {
        label: "14x7",
        patterns: &[
            "11110111",
            "110111011",
            "1110010111",
            "1101011011",
            "11011000111",
            "111000101011",
            "1101001000111",
            "11010100001101",
            "11100010010011",
            "110100000100111",
            "110010100001011",
            "1101000001010011",
            "11001001000100011",
            "10101000010001011",
        ],
    },
    // 13
    ShapeSet {
        label: "64x7",
        patterns: &[
            "1111111",
            "111100111",
            "110110111",
            "111101011",
            "111011011",
            "110101111",
            "111011101",
            "1110010111",
            "1110100111",
            "11100011011",
            "11011000111",
            "11010101011",
            "11001101011",
            "111001000111",
            "110011001011",
            "110100101011",
            "110100100111",
            "110101001101",
            "110101001011",
            "111000110011",
            "110100010111",
            "1110010010011",
            "1110001010011",
            "1101010001011",
            "1100101010011",
            "11001001000111",
            "11010010000111",
            "11010000101011",
            "11010010010011",
            "11100010010101",
            "11100100001011",
            "110010001000111",
            "111000010001011",
            "101010100000111",
            "110101000100101",
            "110010001001011",
            "110100010100011",
            "110010100010011",
            "101100000101011",
            "110001001001011",
            "110101000010011",
            "1101000100001011",
            "1101001000100011",
            "1101000100010101",
            "11010000001010011",
            "11100001000010011",
            "11010000100001011",
            "10101000010010011",
            "11000101000001011",
            "11001000000100111",
            "101001000010001011",
            "111000010000001011",
            "110010000100010011",
            "1101000001000010011",
            "1101000100000100011",
            "1100010100000001011",
            "1100010001000010101",
            "1010100000010001011",
            "1101000000010000111",
            "1100100000100100101",
            "1011000010000010011",
            "1110000001000001011",
            "1100100000100001011",
            "1100100000001000111",
        ],
    },
    // 14
    ShapeSet {
        label: "64x8",
        patterns: &[
            "11111111",
            "111101111",
            "111011111",
            "1110110111",
            "11011001111",
            "11101100111",
            "11101011011",
            "11110010111",
            "111100011011",
            "110110101011",
            "111010100111",
            "110011010111",
            "110100110111",
            "1101010101011",
            "1111000011011",
            "1101100010111",
            "1101010011011",
            "1110001101011",
            "1110011001011",
            "1101011000111",
            "11101000100111",
            "11011001000111",
            "11100100011011",
            "11100010100111",
            "110101001000111",
            "111001010010011",
            "110010100101011",
            "110100100110011",
            "110011000010111",
            "110100101000111",
            "111000010101011",
            "111001001001011",
            "110101000011011",
            "110100100100111",
            "1110100001010011",
            "1101010001000111",
            "1101000110000111",
            "1101000101010011",
            "11100010001001011",
            "11010010010001011",
            "11011000001010011",
            "11010001000010111",
            "11100010100010011",
            "11100001010001011",
            "11010100000101011",
            "11100100000100111",
            "10101000100100111",
            "11100100001001011",
            "11001010000101011",
            "110010010001000111",
            "110010100100001011",
            "110101000010010011",
            "110010001010001011",
            "101100100010001011",
            "110100010010000111",
            "101010010000101011",
            "110100001000101011",
            "111001000100001011",
            "1101010000010000111",
            "1101001000001001011",
            "1110000100001010011",
            "1110010000001001011",
            "1110001000010001011",
            "1110000010000100111",
        ],
    },
    // 15
    ShapeSet {
        label: "8x9",
        patterns: &[
            "11011111011",
            "111100101111",
            "1101010110111",
            "11011011000111",
            "11100101010111",
            "111000110011011",
            "111010000110111",
            "111010001000001111",
        ],
    },
];
