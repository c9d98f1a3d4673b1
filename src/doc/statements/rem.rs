/*!
# `REM <anything>`

## Purpose
Leave a remark for human readers.

## Remarks
The rest of the line is ignored, whatever it contains.

## Example
```text
rem worked first try, do not touch
```

*/
