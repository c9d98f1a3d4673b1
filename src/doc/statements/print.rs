/*!
# `PRINT <expression> [, <expression> ...]`

## Purpose
Output one line of text.

## Remarks
Each expression is converted to its display form and the pieces are
joined with nothing between them; the comma separates expressions but
adds no spacing of its own. The finished line always ends with a
newline.

## Example
```text
PRINT "We have ", 2+2, " cookies"
```
```text
We have 4 cookies
```

*/
